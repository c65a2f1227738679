//! A small pool of reusable `String` buffers shared by block and inline
//! parsers, so a scan that needs scratch space (trimming, unescaping,
//! building a literal run) doesn't allocate on every call.
//!
//! Guarded by a mutex so the same pool can be shared across the rayon
//! workers that drive the parallel inline phase; callers that want to avoid
//! lock contention can instead give each worker its own `StringPool`.

use std::sync::Mutex;

#[derive(Default)]
pub struct StringPool {
    inner: Mutex<Vec<String>>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a cleared buffer from the pool. Returned on drop via [`PooledString`].
    pub fn acquire(&self) -> PooledString<'_> {
        let buf = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop()
            .unwrap_or_default();
        PooledString {
            pool: self,
            buf: Some(buf),
        }
    }
}

/// A buffer borrowed from a [`StringPool`]. Every path that borrows one,
/// including early-return on parser failure, returns it to the pool on drop.
pub struct PooledString<'a> {
    pool: &'a StringPool,
    buf: Option<String>,
}

impl std::ops::Deref for PooledString<'_> {
    type Target = String;
    fn deref(&self) -> &String {
        self.buf.as_ref().expect("PooledString used after drop")
    }
}

impl std::ops::DerefMut for PooledString<'_> {
    fn deref_mut(&mut self) -> &mut String {
        self.buf.as_mut().expect("PooledString used after drop")
    }
}

impl Drop for PooledString<'_> {
    fn drop(&mut self) {
        if let Some(mut buf) = self.buf.take() {
            buf.clear();
            if let Ok(mut pool) = self.pool.inner.lock() {
                pool.push(buf);
            }
        }
    }
}
