//! Shared handle for stores that need more than one reader.
//!
//! The stores in this workspace are single-owner (`&mut self` to mutate).
//! `SharedStore` puts one behind `Arc<RwLock<_>>` so several handles can read
//! concurrently while writes stay exclusive.

use std::sync::Arc;

use parking_lot::RwLock;

#[derive(Debug)]
pub struct SharedStore<S> {
    inner: Arc<RwLock<S>>,
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run `f` under a shared read lock.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Run `f` under the exclusive write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    pub fn handle(&self) -> Arc<RwLock<S>> {
        Arc::clone(&self.inner)
    }

    /// Unwrap the store if this is the last handle.
    pub fn try_unwrap(self) -> Result<S, Self> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let a = SharedStore::new(Vec::<u32>::new());
        let b = a.clone();
        a.write(|v| v.push(1));
        assert_eq!(b.read(|v| v.clone()), vec![1]);
    }

    #[test]
    fn try_unwrap_requires_last_handle() {
        let a = SharedStore::new(5u8);
        let b = a.clone();
        let a = a.try_unwrap().unwrap_err();
        drop(b);
        assert_eq!(a.try_unwrap().ok(), Some(5));
    }

    #[test]
    fn concurrent_readers() {
        let store = SharedStore::new((0..100u32).collect::<Vec<_>>());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = store.clone();
                std::thread::spawn(move || s.read(|v| v.iter().sum::<u32>()))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 4950);
        }
    }
}
