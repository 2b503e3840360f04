use alloc::sync::Arc;
use core::fmt;
use core::ops::Deref;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::registry::MetadataRegistry;

// -----------------------------------------------------------------------------
// SealedRegistry

/// A read-only [`MetadataRegistry`], shared without locking.
///
/// Only `&self` methods are reachable through [`Deref`], so nothing can be
/// injected after sealing.
#[derive(Clone)]
pub struct SealedRegistry {
    inner: Arc<MetadataRegistry>,
}

impl SealedRegistry {
    #[inline]
    pub(crate) fn new(inner: Arc<MetadataRegistry>) -> Self {
        Self { inner }
    }
}

impl Deref for SealedRegistry {
    type Target = MetadataRegistry;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Debug for SealedRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SealedRegistry").field(&*self.inner).finish()
    }
}

// -----------------------------------------------------------------------------
// MetadataRegistryArc

/// A [`MetadataRegistry`] shared by threads during bootstrap.
///
/// Every write goes through the lock; once all classes are loaded and the
/// other handles are dropped, [`seal`](Self::seal) hands out a lock-free
/// [`SealedRegistry`].
#[derive(Clone, Default)]
pub struct MetadataRegistryArc {
    /// The wrapped [`MetadataRegistry`].
    pub internal: Arc<RwLock<MetadataRegistry>>,
}

impl MetadataRegistryArc {
    /// Takes a read lock on the underlying [`MetadataRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, MetadataRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`MetadataRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, MetadataRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Seals the registry.
    ///
    /// Fails and returns the handle if other handles are still alive, since
    /// writes through them could no longer reach the sealed registry.
    pub fn seal(self) -> Result<SealedRegistry, Self> {
        match Arc::try_unwrap(self.internal) {
            Ok(lock) => Ok(lock
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner)
                .seal()),
            Err(internal) => Err(Self { internal }),
        }
    }

    /// Number of live handles sharing this registry.
    #[inline]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.internal)
    }
}

impl fmt::Debug for MetadataRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{MetadataRegistryArc, SealedRegistry};
    use crate::info::{Type, set_of};
    use crate::options::MemberOptions;
    use crate::registry::MemberMetadata;

    struct Team;

    fn assert_send_sync<T: Send + Sync>() {}

    fn member(key: &str) -> MemberMetadata {
        MemberMetadata::new(
            Type::of::<Team>(),
            key,
            set_of(Type::of::<String>()),
            MemberOptions::new(),
        )
    }

    #[test]
    fn sealed_is_shareable() {
        assert_send_sync::<SealedRegistry>();
        assert_send_sync::<MetadataRegistryArc>();
    }

    #[test]
    fn concurrent_bootstrap_then_seal() {
        let registry = MetadataRegistryArc::default();

        let handles: Vec<_> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|key| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    registry.write().inject(member(key));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let sealed = registry.seal().unwrap();
        assert_eq!(sealed.len(), 4);

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let sealed = sealed.clone();
                std::thread::spawn(move || sealed.lookup_of::<Team>("c").is_some())
            })
            .collect();
        for reader in readers {
            assert!(reader.join().unwrap());
        }
    }

    #[test]
    fn seal_requires_sole_handle() {
        let registry = MetadataRegistryArc::default();
        let late = registry.clone();
        registry.write().inject(member("a"));
        assert_eq!(registry.handle_count(), 2);

        let registry = registry.seal().unwrap_err();
        assert_eq!(registry.handle_count(), 2);

        // the refused seal left the registry open for the other handle
        late.write().inject(member("b"));
        drop(late);

        let sealed = registry.seal().unwrap();
        assert_eq!(sealed.len(), 2);
        assert!(sealed.lookup_of::<Team>("b").is_some());
    }
}
