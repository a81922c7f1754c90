pub mod mock_capture;

pub use mock_capture::*;
pub use mock_engine::*;
pub use mock_link::*;
pub use mock_observer::*;

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Shared call journal the mocks append to, for asserting cross-component
/// ordering (e.g. "description sent before it was registered locally").
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn new_journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn journal_entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

/// Poll `predicate` until it holds or `timeout_ms` elapses.
pub async fn wait_until<F>(mut predicate: F, timeout_ms: u64) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        if predicate() {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Give the manager loop a moment to drain everything already queued.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
