use chaintable::{Error, HashTable, HashTableExtensions, MAX_LOAD_FACTOR, TableConfig};

#[test]
fn test_single_bucket_scenario() {
    let mut table = HashTable::with_capacity(1).unwrap();
    table.set("a".to_string(), 1);
    table.set("b".to_string(), 2);
    table.set("b".to_string(), 3);

    assert_eq!(table.get("a"), Ok(&1));
    assert_eq!(table.get("b"), Ok(&3));
    assert_eq!(table["b"], 3);
    assert_eq!(table.len(), 2);
    assert!(table.capacity() > 1);
}

#[test]
fn test_empty_table_lookups() {
    let table: HashTable<String, i32> = HashTable::new();

    assert_eq!(table.get("anything"), Err(Error::KeyNotFound));
    assert_eq!(table.try_get("anything"), None);
    assert_eq!(table.try_get("anything").copied().unwrap_or_default(), 0);
    assert!(!table.contains_key("anything"));
    assert!(!table.contains_value(&0));
    assert_eq!(table.capacity(), 11);
}

#[test]
fn test_default_matches_new() {
    let table: HashTable<u8, u8> = HashTable::default();
    assert_eq!(table.capacity(), 11);
    assert!(table.is_empty());
}

#[test]
fn test_config_construction() {
    let table: HashTable<u8, u8> =
        HashTable::with_config(TableConfig::new().with_initial_capacity(32)).unwrap();
    assert_eq!(table.capacity(), 32);

    let result: Result<HashTable<u8, u8>, Error> =
        HashTable::with_config(TableConfig::new().with_initial_capacity(0));
    assert_eq!(result.err(), Some(Error::InvalidCapacity { capacity: 0 }));
}

#[test]
fn test_growth_preserves_contents() {
    let mut table = HashTable::with_capacity(2).unwrap();
    for i in 0..1_000 {
        table.insert(format!("key-{i}"), i).unwrap();
    }

    assert_eq!(table.len(), 1_000);
    assert!(table.capacity() >= 1_024);
    for i in 0..1_000 {
        assert_eq!(table.get(&format!("key-{i}")), Ok(&i));
    }
    assert!(table.load_factor() <= MAX_LOAD_FACTOR);
}

#[test]
fn test_remove_round_trip() {
    let mut table = HashTable::new();
    table.set(7_u64, "seven");

    assert!(table.remove(&7));
    assert!(!table.contains_key(&7));
    assert!(!table.remove(&7));
    assert!(table.is_empty());
}

#[test]
fn test_removal_never_shrinks() {
    let mut table = HashTable::with_capacity(4).unwrap();
    for i in 0..64 {
        table.set(i, i);
    }
    let capacity = table.capacity();

    for i in 0..64 {
        assert!(table.remove(&i));
    }

    assert_eq!(table.capacity(), capacity);
    assert_eq!(table.chain_stats().occupied_buckets, 0);
}

#[test]
fn test_clear_then_reuse() {
    let mut table: HashTable<i32, i32> = (0..50).map(|i| (i, -i)).collect();
    let capacity = table.capacity();

    table.clear();
    assert_eq!(table.len(), 0);
    assert_eq!(table.capacity(), capacity);
    assert!(!table.contains_value(&-1));

    table.insert(1, 1).unwrap();
    assert_eq!(table.get(&1), Ok(&1));
    assert_eq!(table.capacity(), capacity);
}

#[test]
fn test_contains_value_in_any_bucket() {
    let mut table = HashTable::with_capacity(16).unwrap();
    for i in 0..10 {
        table.set(i, format!("value-{i}"));
    }

    // Every value is found, not only those in the last bucket scanned
    for i in 0..10 {
        assert!(table.contains_value(&format!("value-{i}")));
    }
    assert!(!table.contains_value(&"value-10".to_string()));
}

#[test]
fn test_contains_all_keys() {
    let table: HashTable<String, usize> =
        ["red", "green", "blue"].iter().enumerate().map(|(i, k)| ((*k).to_string(), i)).collect();

    assert!(table.contains_all_keys(&["red", "green", "blue"]));
    assert!(!table.contains_all_keys(&["red", "yellow"]));
}
