//! Process-wide classifier handle cache.
//!
//! The artifact is deserialized at most once per process. Success and
//! failure are both cached: a failed load is permanent and every later
//! request sees the `Unavailable` sentinel instead of a retry. Restart is
//! the only recovery path.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::{error, info};

use crate::error::Result;
use crate::model::classifier::{Classifier, OnnxClassifier};

/// Handle to the process-wide classifier.
///
/// `Ready` shares the loaded model read-only across requests. `Unavailable`
/// carries the diagnostic from the failed load so the boundary can surface
/// a human-readable message instead of crashing.
#[derive(Clone)]
pub enum ClassifierHandle {
    Ready(Arc<dyn Classifier>),
    Unavailable(String),
}

impl ClassifierHandle {
    /// Whether a loaded model is behind this handle
    pub fn is_ready(&self) -> bool {
        matches!(self, ClassifierHandle::Ready(_))
    }

    /// Diagnostic message from a failed load, if any
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ClassifierHandle::Ready(_) => None,
            ClassifierHandle::Unavailable(message) => Some(message),
        }
    }
}

/// Lazily-initialized, single-assignment cache for a classifier handle.
///
/// Wraps `OnceLock` so the load closure runs at most once; repeated calls
/// return the identical cached handle whether the load succeeded or not.
pub struct ModelCache {
    slot: OnceLock<ClassifierHandle>,
}

impl ModelCache {
    /// Create an empty cache
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Return the cached handle, running `load` first if the cache is empty.
    pub fn get_or_load<F>(&self, load: F) -> &ClassifierHandle
    where
        F: FnOnce() -> Result<Arc<dyn Classifier>>,
    {
        self.slot.get_or_init(|| match load() {
            Ok(classifier) => ClassifierHandle::Ready(classifier),
            Err(e) => {
                error!("Classifier load failed: {e}");
                ClassifierHandle::Unavailable(e.to_string())
            }
        })
    }

    /// The cached handle, if the load has already run
    pub fn get(&self) -> Option<&ClassifierHandle> {
        self.slot.get()
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}

static CLASSIFIER: ModelCache = ModelCache::new();

/// Load the process-wide classifier from `path`, or return the cached
/// handle from an earlier call. The path and thread count of the first call
/// win; later arguments are ignored.
pub fn load_classifier(path: &Path, intra_threads: usize) -> &'static ClassifierHandle {
    CLASSIFIER.get_or_load(|| {
        info!(path = %path.display(), "Loading classifier artifact");
        let classifier = OnnxClassifier::load(path, intra_threads)?;
        Ok(Arc::new(classifier) as Arc<dyn Classifier>)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use ndarray::Array4;

    use crate::error::Error;

    struct CountingClassifier;

    impl Classifier for CountingClassifier {
        fn forward(&self, _input: &Array4<f32>) -> Result<Vec<f32>> {
            Ok(vec![1.0, 0.0, 0.0])
        }
    }

    #[test]
    fn test_cache_loads_exactly_once() {
        let cache = ModelCache::new();
        let loads = AtomicUsize::new(0);

        let first = cache
            .get_or_load(|| {
                loads.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(CountingClassifier) as Arc<dyn Classifier>)
            })
            .clone();
        let second = cache
            .get_or_load(|| {
                loads.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(CountingClassifier) as Arc<dyn Classifier>)
            })
            .clone();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        match (&first, &second) {
            (ClassifierHandle::Ready(a), ClassifierHandle::Ready(b)) => {
                assert!(Arc::ptr_eq(a, b), "both calls must return the same handle");
            }
            _ => panic!("expected both handles to be ready"),
        }
    }

    #[test]
    fn test_failed_load_is_cached_as_unavailable() {
        let cache = ModelCache::new();
        let loads = AtomicUsize::new(0);

        for _ in 0..2 {
            let handle = cache.get_or_load(|| {
                loads.fetch_add(1, Ordering::SeqCst);
                Err(Error::ModelLoad("artifact missing".to_string()))
            });
            assert!(!handle.is_ready());
            assert!(handle.diagnostic().unwrap().contains("artifact missing"));
        }

        // No retry: the failing closure ran once and the failure is permanent
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_get_before_load_is_empty() {
        let cache = ModelCache::new();
        assert!(cache.get().is_none());

        cache.get_or_load(|| Ok(Arc::new(CountingClassifier) as Arc<dyn Classifier>));
        assert!(cache.get().is_some());
    }
}
