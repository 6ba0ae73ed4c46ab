pub mod error;
pub mod map;

pub use error::Error;
pub use map::TreeMap;

#[macro_export(local_inner_macros)]
macro_rules! treemap {
    // trailing comma case
    ($($key:expr => $value:expr,)+) => (treemap!($($key => $value),+));

    ( $($key:expr => $value:expr),* ) => {
        {
            let mut _map = $crate::TreeMap::new();
            $(
                let _ = _map.put($key, $value);
            )*
            _map
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn treemap_macro() {
        let map = treemap! {
            1 => 2,
            3 => 4,
            2 => 3, // trailing comma
        };

        assert_eq!(map.len(), 3);
        assert_eq!(map.to_string(), "[ (1, 2) (2, 3) (3, 4) ]");

        // No trailing comma
        let map = treemap![3 => 4];
        assert_eq!(map.to_string(), "[ (3, 4) ]");

        // Repeated keys keep the last value
        let map = treemap![3 => 4, 3 => 5];
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&3), Some(&5));

        // Zero items
        let map: crate::TreeMap<i32, i32> = treemap!();
        assert!(map.is_empty());
        assert_eq!(map.to_string(), "[ ]");
    }
}
