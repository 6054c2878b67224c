use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Upper bound for how stale a catalog snapshot may get.
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(60);

struct Snapshot<T> {
    value: Arc<T>,
    loaded_at: Instant,
}

/// Time-bounded cache holding one immutable snapshot.
///
/// Readers get an `Arc` to a complete snapshot. The staleness check, the
/// reload and the swap all happen while holding the mutex, so two readers
/// racing on an expired entry trigger a single load and nobody ever observes
/// a half-built value.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Mutex<Option<Snapshot<T>>>,
}

impl<T> TtlCache<T> {
    /// Creates an empty cache. TTLs above [`MAX_CACHE_TTL`] are clamped.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: ttl.min(MAX_CACHE_TTL),
            slot: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached snapshot, running `load` first when the cache is
    /// empty or expired. A failed load leaves the previous state untouched
    /// and hands the error back to the caller.
    pub async fn get_or_refresh<F, Fut, E>(&self, load: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(snapshot) = slot.as_ref()
            && snapshot.loaded_at.elapsed() < self.ttl
        {
            return Ok(Arc::clone(&snapshot.value));
        }

        let value = Arc::new(load().await?);
        *slot = Some(Snapshot {
            value: Arc::clone(&value),
            loaded_at: Instant::now(),
        });
        Ok(value)
    }

    /// Drops the current snapshot so the next read reloads.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn should_load_once_while_fresh() {
        let cache = TtlCache::new(Duration::from_secs(60));
        let loads = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_refresh(|| async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ()>(vec![1, 2, 3])
                })
                .await
                .unwrap();
            assert_eq!(*value, vec![1, 2, 3]);
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_reload_when_expired() {
        let cache = TtlCache::new(Duration::ZERO);
        let loads = AtomicUsize::new(0);

        for _ in 0..2 {
            cache
                .get_or_refresh(|| async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ()>(7)
                })
                .await
                .unwrap();
        }

        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn should_not_store_failed_load() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));

        let failed = cache.get_or_refresh(|| async { Err("down") }).await;
        assert!(failed.is_err());

        let value = cache
            .get_or_refresh(|| async { Ok::<_, &str>(5) })
            .await
            .unwrap();
        assert_eq!(*value, 5);
    }

    #[tokio::test]
    async fn should_reload_after_invalidate() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
        cache
            .get_or_refresh(|| async { Ok::<_, ()>(1) })
            .await
            .unwrap();
        cache.invalidate().await;

        let value = cache
            .get_or_refresh(|| async { Ok::<_, ()>(2) })
            .await
            .unwrap();
        assert_eq!(*value, 2);
    }

    #[test]
    fn should_clamp_ttl_to_maximum() {
        let cache: TtlCache<()> = TtlCache::new(Duration::from_secs(600));
        assert_eq!(cache.ttl(), MAX_CACHE_TTL);
    }
}
