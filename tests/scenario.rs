#![warn(rust_2018_idioms)]

use tree_map::{Error, TreeMap};

fn numbers() -> TreeMap<i32, &'static str> {
    let mut tree = TreeMap::new();
    assert_eq!(tree.size(), 0);

    let entries = [
        (4, "four"),
        (5, "five"),
        (3, "three"),
        (1, "one"),
        (6, "six"),
        (0, "zero"),
        (7, "seven"),
        (2, "two"),
    ];
    for (key, value) in entries {
        assert_eq!(tree.put(key, value), None);
    }

    tree
}

#[test]
fn numbers_scenario() {
    let mut tree = numbers();
    assert_eq!(tree.size(), 8);

    assert_eq!(tree.remove(&2), Ok(Some("two")));
    assert_eq!(tree.size(), 7);

    assert_eq!(tree.remove(&8), Ok(None));
    assert_eq!(tree.size(), 7);

    let err = tree.remove(&4).unwrap_err();
    assert_eq!(err, Error::InvalidOperation);
    assert_eq!(err.to_string(), "only leaf nodes can be removed");
    assert_eq!(tree.size(), 7);

    assert_eq!(tree.get(&5), Some(&"five"));
    assert_eq!(tree.get(&8), None);

    assert_eq!(
        tree.to_string(),
        "[ (0, zero) (1, one) (3, three) (4, four) (5, five) (6, six) (7, seven) ]",
    );
}

#[test]
fn replacing_keeps_size() {
    let mut tree = numbers();

    assert_eq!(tree.put(6, "SIX"), Some("six"));
    assert_eq!(tree.put(6, "sechs"), Some("SIX"));
    assert_eq!(tree.get(&6), Some(&"sechs"));
    assert_eq!(tree.size(), 8);
    assert!(!tree.is_empty());
}

#[test]
fn rejected_removal_changes_nothing() {
    let mut tree = numbers();
    let dump = tree.to_string();

    // 3 has a left child (1), 1 has two children (0 and 2)
    for key in [4, 3, 1, 5, 6] {
        assert_eq!(tree.remove(&key), Err(Error::InvalidOperation));
    }

    assert_eq!(tree.size(), 8);
    assert_eq!(tree.to_string(), dump);
    assert_eq!(tree, numbers());
}

#[test]
fn drain_leaves_bottom_up() {
    let mut tree = numbers();

    // Leaves first, then the nodes they used to hang from
    for key in [0, 2, 1, 3, 7, 6, 5, 4] {
        let size = tree.size();
        assert!(tree.remove(&key).unwrap().is_some());
        assert_eq!(tree.size(), size - 1);
        assert_eq!(tree.get(&key), None);
    }

    assert!(tree.is_empty());
    assert_eq!(tree.to_string(), "[ ]");
}
