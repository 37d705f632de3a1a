use std::collections::HashMap;

use chaintable::{Error, HashTable, MAX_LOAD_FACTOR};
use proptest::prelude::*;

/// A single mutation applied to both the table and the reference map
#[derive(Debug, Clone)]
enum Op {
    Insert(u8, i32),
    Set(u8, i32),
    Remove(u8),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<u8>(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        4 => (any::<u8>(), any::<i32>()).prop_map(|(k, v)| Op::Set(k, v)),
        2 => any::<u8>().prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn last_set_wins(pairs in prop::collection::vec((any::<u8>(), any::<i32>()), 0..300)) {
        let mut table = HashTable::new();
        let mut model = HashMap::new();
        for (key, value) in pairs {
            table.set(key, value);
            model.insert(key, value);
        }

        prop_assert_eq!(table.len(), model.len());
        for key in 0..=u8::MAX {
            prop_assert_eq!(table.contains_key(&key), model.contains_key(&key));
            prop_assert_eq!(table.try_get(&key), model.get(&key));
        }
    }

    #[test]
    fn insert_rejects_duplicates(key in any::<String>(), first in any::<i64>(), second in any::<i64>()) {
        let mut table = HashTable::new();
        prop_assert_eq!(table.insert(key.clone(), first), Ok(()));
        prop_assert_eq!(table.get(&key), Ok(&first));
        prop_assert_eq!(table.insert(key.clone(), second), Err(Error::DuplicateKey));
        prop_assert_eq!(table.get(&key), Ok(&first));
        prop_assert_eq!(table.len(), 1);
    }

    #[test]
    fn matches_reference_map(
        capacity in 1_usize..16,
        ops in prop::collection::vec(op_strategy(), 0..400),
    ) {
        let mut table = HashTable::with_capacity(capacity).unwrap();
        let mut model = HashMap::new();

        for op in ops {
            let capacity_before = table.capacity();
            let len_before = table.len();
            match op {
                Op::Insert(key, value) => {
                    let expected = if model.contains_key(&key) {
                        Err(Error::DuplicateKey)
                    } else {
                        model.insert(key, value);
                        Ok(())
                    };
                    prop_assert_eq!(table.insert(key, value), expected);
                }
                Op::Set(key, value) => {
                    prop_assert_eq!(table.set(key, value), model.insert(key, value));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(table.remove(&key), model.remove(&key).is_some());
                }
                Op::Clear => {
                    table.clear();
                    model.clear();
                    prop_assert_eq!(table.capacity(), capacity_before);
                }
            }

            prop_assert!(table.capacity() >= capacity_before);
            prop_assert_eq!(table.len(), model.len());
            if table.len() > len_before {
                prop_assert!(table.load_factor() <= MAX_LOAD_FACTOR + 1e-9);
            }
        }

        for (key, value) in &model {
            prop_assert_eq!(table.get(key), Ok(value));
        }
    }

    #[test]
    fn contains_value_finds_every_value(values in prop::collection::vec(any::<i16>(), 1..100)) {
        let mut table = HashTable::with_capacity(3).unwrap();
        for (i, value) in values.iter().enumerate() {
            table.set(i, *value);
        }

        for value in &values {
            prop_assert!(table.contains_value(value));
        }
    }
}
