//! Name to operation lookup over the declared element surface

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use element_proxy::{declared_operations, Operation};
use once_cell::sync::OnceCell;
use tracing::debug;

/// Supplies the declared operations an index is built from.
pub type OperationSource = fn() -> &'static [Operation];

type OperationIndex = HashMap<&'static str, &'static Operation>;

/// Lazily built, build-once index of operations by name.
///
/// Overloads collapse to the first declared entry; there is no resolution by
/// argument types. After the build every lookup is a plain read.
pub struct OperationCache {
    source: OperationSource,
    index: OnceCell<OperationIndex>,
    builds: AtomicUsize,
}

impl OperationCache {
    pub const fn new(source: OperationSource) -> Self {
        Self {
            source,
            index: OnceCell::new(),
            builds: AtomicUsize::new(0),
        }
    }

    pub fn resolve(&self, name: &str) -> Option<&'static Operation> {
        self.index().get(name).copied()
    }

    pub fn is_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// Number of times the index has been built; at most one.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    fn index(&self) -> &OperationIndex {
        self.index.get_or_init(|| self.build())
    }

    fn build(&self) -> OperationIndex {
        self.builds.fetch_add(1, Ordering::SeqCst);
        let declared = (self.source)();
        let mut index = HashMap::with_capacity(declared.len());
        for operation in declared {
            index.entry(operation.name()).or_insert(operation);
        }
        debug!(
            declared = declared.len(),
            names = index.len(),
            "element operation index built"
        );
        index
    }
}

/// Process-wide index shared by every accessor.
pub static ELEMENT_OPERATIONS: OperationCache = OperationCache::new(declared_operations);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    static OVERLOADED: &[Operation] = &[
        Operation::new("find", &["String"]),
        Operation::new("find", &["String", "int"]),
        Operation::new("text", &[]),
    ];

    fn overloaded() -> &'static [Operation] {
        OVERLOADED
    }

    #[test]
    fn first_declared_overload_wins() {
        let cache = OperationCache::new(overloaded);
        let find = cache.resolve("find").expect("declared");
        assert_eq!(find.params(), &["String"]);
        assert!(cache.resolve("findAll").is_none());
    }

    #[test]
    fn builds_lazily_once() {
        let cache = OperationCache::new(overloaded);
        assert!(!cache.is_built());
        assert_eq!(cache.build_count(), 0);

        cache.resolve("text");
        cache.resolve("missing");
        assert!(cache.is_built());
        assert_eq!(cache.build_count(), 1);
    }

    fn slow_overloaded() -> &'static [Operation] {
        thread::sleep(Duration::from_millis(20));
        OVERLOADED
    }

    #[test]
    fn contended_first_use_builds_once() {
        const WORKERS: usize = 16;
        let cache = Arc::new(OperationCache::new(slow_overloaded));
        let start = Arc::new(Barrier::new(WORKERS));
        let workers: Vec<_> = (0..WORKERS)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let start = Arc::clone(&start);
                thread::spawn(move || {
                    start.wait();
                    cache.resolve("text").map(Operation::name)
                })
            })
            .collect();
        for worker in workers {
            assert_eq!(worker.join().expect("worker"), Some("text"));
        }
        assert_eq!(cache.build_count(), 1);
    }

    #[test]
    fn global_index_covers_declared_surface() {
        assert!(ELEMENT_OPERATIONS.resolve("toString").is_some());
        assert_eq!(
            ELEMENT_OPERATIONS
                .resolve(element_proxy::EXECUTE)
                .map(Operation::arity),
            Some(1)
        );
        assert_eq!(ELEMENT_OPERATIONS.build_count(), 1);
    }
}
