use anyhow::{Result, bail};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use walkie_client::media::{CaptureSource, LocalMedia};
use walkie_core::CallConfig;

/// Mock capture source with per-operation counters and a permission switch.
pub struct MockCapture {
    available: bool,
    created: AtomicUsize,
    paused: AtomicUsize,
    resumed: AtomicUsize,
    disposed: AtomicUsize,
}

impl MockCapture {
    pub fn granted() -> Self {
        Self::new(true)
    }

    pub fn denied() -> Self {
        Self::new(false)
    }

    fn new(available: bool) -> Self {
        Self {
            available,
            created: AtomicUsize::new(0),
            paused: AtomicUsize::new(0),
            resumed: AtomicUsize::new(0),
            disposed: AtomicUsize::new(0),
        }
    }

    pub fn create_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn pause_count(&self) -> usize {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn resume_count(&self) -> usize {
        self.resumed.load(Ordering::SeqCst)
    }

    pub fn dispose_count(&self) -> usize {
        self.disposed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptureSource for MockCapture {
    async fn create_local_stream(&self, config: &CallConfig) -> Result<LocalMedia> {
        if !self.available {
            bail!("permission denied");
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(LocalMedia {
            id: "mock-local".to_owned(),
            has_video: config.video_enabled,
        })
    }

    async fn pause(&self) {
        self.paused.fetch_add(1, Ordering::SeqCst);
    }

    async fn resume(&self) {
        self.resumed.fetch_add(1, Ordering::SeqCst);
    }

    async fn dispose(&self) {
        self.disposed.fetch_add(1, Ordering::SeqCst);
    }
}
