//! Concurrency-safe object pooling
//!
//! Events and encoders are recycled through free lists to keep the hot
//! dispatch path free of per-call heap allocation. Pools are safe for
//! concurrent acquire/release; instances are single-owner while out.

use parking_lot::Mutex;

/// Types that can live in a [`Pool`].
pub trait Reusable: Default {
    /// Return the value to its zero state.
    ///
    /// Runs as part of every [`Pool::release`], never as a caller step, so a
    /// recycled instance can never leak data from its previous use.
    fn reset(&mut self);
}

/// An unbounded free list of reusable instances.
pub struct Pool<T> {
    free: Mutex<Vec<T>>,
}

impl<T> Pool<T> {
    /// `const` so pools can be module-level statics without lazy init.
    pub const fn new() -> Self {
        Self {
            free: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Reusable> Pool<T> {
    /// Hand out a recycled instance, or a fresh one when the list is empty.
    pub fn acquire(&self) -> T {
        self.free.lock().pop().unwrap_or_default()
    }

    /// Reset an instance and return it to the free list.
    pub fn release(&self, mut item: T) {
        item.reset();
        self.free.lock().push(item);
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Default)]
    struct Counter {
        value: u64,
    }

    impl Reusable for Counter {
        fn reset(&mut self) {
            self.value = 0;
        }
    }

    #[test]
    fn test_acquire_empty_pool_constructs() {
        let pool: Pool<Counter> = Pool::new();
        let item = pool.acquire();
        assert_eq!(item.value, 0);
    }

    #[test]
    fn test_release_resets() {
        let pool: Pool<Counter> = Pool::new();
        let mut item = pool.acquire();
        item.value = 42;
        pool.release(item);

        let recycled = pool.acquire();
        assert_eq!(recycled.value, 0);
    }

    #[test]
    fn test_instances_are_recycled() {
        let pool: Pool<Counter> = Pool::new();
        pool.release(Counter { value: 1 });
        pool.release(Counter { value: 2 });
        assert_eq!(pool.free.lock().len(), 2);

        let _a = pool.acquire();
        let _b = pool.acquire();
        assert_eq!(pool.free.lock().len(), 0);
    }

    #[test]
    fn test_concurrent_acquire_release() {
        let pool: Arc<Pool<Counter>> = Arc::new(Pool::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let pool = Arc::clone(&pool);
            handles.push(std::thread::spawn(move || {
                for i in 0..1000 {
                    let mut item = pool.acquire();
                    assert_eq!(item.value, 0);
                    item.value = i;
                    pool.release(item);
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker panicked");
        }
    }
}
