//! Tree walking
//!
//! Two walkers share one visitor contract:
//!
//! - [`walk_dir`]: breadth-first, every entry at depth `d` before any at `d + 1`
//! - [`walk_dir_depth_first`]: conventional pre-order traversal
//!
//! Both visit siblings in lexical order and react identically to [`Signal`]s,
//! so a visitor can be moved from one to the other unchanged.

mod breadth_first;
mod depth_first;
mod signal;

pub use breadth_first::walk_dir;
pub use depth_first::walk_dir_depth_first;
pub use signal::Signal;

use crate::storage::Storage;

/// Traversal order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    BreadthFirst,
    DepthFirst,
}

impl Order {
    /// Walk `root` in this order. See [`walk_dir`] for the visitor contract.
    pub fn walk<S, E, F>(self, storage: &S, root: &str, visit: F) -> Result<(), E>
    where
        S: Storage + ?Sized,
        F: FnMut(&str, Option<&S::Entry>, Option<S::Error>) -> Signal<E>,
    {
        match self {
            Order::BreadthFirst => walk_dir(storage, root, visit),
            Order::DepthFirst => walk_dir_depth_first(storage, root, visit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemStorage;

    #[test]
    fn test_order_dispatch() {
        let storage: MemStorage = ["root/a/x.txt", "root/b.txt"].into_iter().collect();
        let mut orders = Vec::new();
        for order in [Order::BreadthFirst, Order::DepthFirst] {
            let mut visited = Vec::new();
            order
                .walk(&storage, "root", |path, _, _| {
                    visited.push(path.to_string());
                    Signal::<StorageError>::Continue
                })
                .unwrap();
            orders.push(visited);
        }
        assert_eq!(orders[0], vec!["root", "root/a", "root/b.txt", "root/a/x.txt"]);
        assert_eq!(orders[1], vec!["root", "root/a", "root/a/x.txt", "root/b.txt"]);
    }
}
