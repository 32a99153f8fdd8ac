//! Property-based tests for the pid set

use backend::{IntSet, Step};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Add(i32),
    Remove(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..500i32).prop_map(Op::Add),
        (0..500i32).prop_map(Op::Remove),
    ]
}

fn apply(set: &mut IntSet, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Add(v) => {
                set.add(v).unwrap();
            }
            Op::Remove(v) => {
                set.remove(v);
            }
        }
    }
}

fn sorted_values(set: &IntSet) -> Vec<i32> {
    let mut values = set.values();
    values.sort_unstable();
    values
}

proptest! {
    #[test]
    fn test_duplicates_are_stored_once(values in prop::collection::vec(0..1000i32, 0..200)) {
        let mut set = IntSet::with_buckets(17).unwrap();
        for &v in &values {
            set.add(v).unwrap();
        }
        let distinct: BTreeSet<i32> = values.iter().copied().collect();

        prop_assert_eq!(set.len(), distinct.len());
        prop_assert_eq!(set.values().len(), distinct.len());
        for &v in &values {
            prop_assert!(set.contains(v));
            prop_assert!(!set.add(v).unwrap());
        }
        prop_assert_eq!(set.len(), distinct.len());
    }

    #[test]
    fn test_add_then_remove_restores_state(
        values in prop::collection::vec(0..1000i32, 0..100),
        extra in 1000..2000i32,
    ) {
        let mut set = IntSet::with_buckets(10).unwrap();
        for &v in &values {
            set.add(v).unwrap();
        }
        let before = set.len();

        prop_assert!(set.add(extra).unwrap());
        prop_assert_eq!(set.len(), before + 1);
        prop_assert!(set.remove(extra));
        prop_assert!(!set.contains(extra));
        prop_assert_eq!(set.len(), before);
    }

    #[test]
    fn test_removing_absent_value_changes_nothing(
        values in prop::collection::vec(0..1000i32, 0..100),
        absent in 1000..5000i32,
    ) {
        let mut set = IntSet::with_buckets(10).unwrap();
        for &v in &values {
            set.add(v).unwrap();
        }
        let before = set.values();

        prop_assert!(!set.remove(absent));
        prop_assert_eq!(set.values(), before);
    }

    #[test]
    fn test_cursor_matches_values(
        ops in prop::collection::vec(op(), 0..300),
        buckets in 1usize..50,
    ) {
        let mut set = IntSet::with_buckets(buckets).unwrap();
        apply(&mut set, &ops);

        let mut cursor = set.cursor();
        let mut seen = Vec::new();
        loop {
            match cursor.next_step() {
                Step::More(v) => seen.push(v),
                Step::Last(v) => {
                    seen.push(v);
                    prop_assert_eq!(cursor.next_step(), Step::PastEnd);
                    break;
                }
                Step::PastEnd => break,
            }
        }

        prop_assert_eq!(seen, set.values());
    }

    #[test]
    fn test_bucket_count_does_not_change_membership(ops in prop::collection::vec(op(), 0..300)) {
        let mut sets: Vec<IntSet> = [1, 7, 1009]
            .iter()
            .map(|&n| IntSet::with_buckets(n).unwrap())
            .collect();
        for set in &mut sets {
            apply(set, &ops);
        }

        let expected = sorted_values(&sets[0]);
        for set in &sets[1..] {
            prop_assert_eq!(&sorted_values(set), &expected);
        }
        for probe in 0..500 {
            let hit = sets[0].contains(probe);
            for set in &sets[1..] {
                prop_assert_eq!(set.contains(probe), hit);
            }
        }
    }
}
