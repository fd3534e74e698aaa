use classic_ds::list::SingleList;

quickcheck::quickcheck! {
    fn sorted_matches_stable_vec_sort(xs: Vec<(u8, u16)>) -> bool {
        // Sort by the first half only so stability is observable through the second.
        #[derive(Clone, Debug, PartialEq, Eq)]
        struct Keyed(u8, u16);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let list: SingleList<_> = xs.iter().map(|&(k, v)| Keyed(k, v)).collect();
        let mut expected: Vec<_> = xs.iter().map(|&(k, v)| Keyed(k, v)).collect();
        expected.sort();

        let sorted = list.sorted();
        sorted.len() == expected.len()
            && sorted.iter().eq(expected.iter())
            && list.iter().map(|k| (k.0, k.1)).eq(xs.iter().copied())
    }

    fn push_front_and_back(front: Vec<i32>, back: Vec<i32>) -> bool {
        let mut list = SingleList::new();
        for x in &front {
            list.push_front(*x);
        }
        for x in &back {
            list.push_back(*x);
        }

        let expected = front.iter().rev().chain(back.iter());
        list.len() == front.len() + back.len()
            && list.iter().eq(expected)
            && list.back() == back.last().or_else(|| front.first())
    }
}
