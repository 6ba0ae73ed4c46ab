//! Runs a small scripted session against `TreeMap` and prints the final contents
//!
//! Set `RUST_LOG=tree_map=trace` to also see the events emitted by the map itself.

use std::error::Error;
use std::fmt;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tree_map::{Error as TreeMapError, TreeMap};

const ENTRIES: &[(i32, &str)] = &[
    (4, "four"),
    (5, "five"),
    (3, "three"),
    (1, "one"),
    (6, "six"),
    (0, "zero"),
    (7, "seven"),
    (2, "two"),
];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut tree = TreeMap::new();
    for &(key, value) in ENTRIES {
        tree.put(key, value);
    }
    info!(size = tree.size(), "inserted entries");
    expect("size after inserts", tree.size(), 8)?;

    let removed = tree.remove(&2)?;
    info!(?removed, size = tree.size(), "removed key 2");
    expect("removing key 2", removed, Some("two"))?;
    expect("size after removing key 2", tree.size(), 7)?;

    let removed = tree.remove(&8)?;
    info!(?removed, size = tree.size(), "removed missing key 8");
    expect("removing missing key 8", removed, None)?;

    // 4 is the root, so it still has children
    let rejected = tree.remove(&4);
    if let Err(err) = &rejected {
        info!(%err, size = tree.size(), "removing key 4 was rejected");
    }
    expect("removing key 4", rejected, Err(TreeMapError::InvalidOperation))?;
    expect("size after rejected removal", tree.size(), 7)?;

    let found = tree.get(&5).copied();
    info!(?found, "looked up key 5");
    expect("looking up key 5", found, Some("five"))?;

    let found = tree.get(&8).copied();
    info!(?found, "looked up key 8");
    expect("looking up key 8", found, None)?;

    println!("{}", tree);
    Ok(())
}

/// Fails the run when a step of the scenario does not produce what it should
fn expect<T: PartialEq + fmt::Debug>(step: &str, actual: T, expected: T) -> Result<(), Box<dyn Error>> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!("{}: expected {:?}, got {:?}", step, expected, actual).into())
    }
}
