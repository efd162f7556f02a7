use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::source::PageSource;

/// On-disk page cache wrapping another source. A cache hit never touches the
/// wrapped source, so reruns are free and offline.
pub struct CachedSource<S> {
    inner: S,
    dir: PathBuf,
}

impl<S> CachedSource<S> {
    pub fn new(inner: S, dir: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            dir: dir.into(),
        }
    }

    fn entry(&self, number: u32) -> PathBuf {
        self.dir.join(format!("{number}.html"))
    }
}

#[async_trait]
impl<S: PageSource> PageSource for CachedSource<S> {
    async fn page(&self, number: u32) -> Result<String> {
        let path = self.entry(number);
        if let Ok(html) = tokio::fs::read_to_string(&path).await {
            tracing::debug!(page = number, "cache hit");
            return Ok(html);
        }

        let html = self.inner.page(number).await?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("failed to create cache dir {}", self.dir.display()))?;
        tokio::fs::write(&path, &html)
            .await
            .with_context(|| format!("failed to cache page {number}"))?;
        Ok(html)
    }
}

/// Offline source: previously saved pages only, a missing page is an error.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl PageSource for DirSource {
    async fn page(&self, number: u32) -> Result<String> {
        let path = self.dir.join(format!("{number}.html"));
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("page {number} not found at {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PageSource for &CountingSource {
        async fn page(&self, number: u32) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("<html>page {number}</html>"))
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kama-fetch-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn cache_hit_skips_the_inner_source() {
        let dir = scratch_dir("hit");
        let counting = CountingSource {
            calls: AtomicUsize::new(0),
        };
        let source = CachedSource::new(&counting, &dir);

        let first = source.page(5).await.unwrap();
        let second = source.page(5).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn dir_source_reads_saved_pages_and_rejects_missing_ones() {
        let dir = scratch_dir("dir");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("3.html"), "<html>saved</html>").unwrap();

        let source = DirSource::new(&dir);
        assert_eq!(source.page(3).await.unwrap(), "<html>saved</html>");
        assert!(source.page(4).await.is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
