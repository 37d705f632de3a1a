//! Walks a one-bucket table through growth and an overwrite, printing the stored values.

use chaintable::{HashTable, HashTableExtensions, initialize_logger};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();

    let mut table = HashTable::with_capacity(1)?;
    table.set("a".to_string(), 1);
    table.set("b".to_string(), 2);

    table.set("b".to_string(), 3);

    println!("{}", table.get("a")?);
    println!("{}", table.get("b")?);

    let stats = table.chain_stats();
    info!(
        "{} entries in {} buckets, longest chain {}",
        stats.len, stats.capacity, stats.longest_chain
    );

    Ok(())
}
