
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Level;

use walkie_client::CallClient;
use walkie_core::{CallConfig, InboundFrame, InboundMessage, PeerId};

use crate::utils::{Journal, MockCapture, MockEngine, MockLink, MockObserver, new_journal};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A running client wired to mocks, plus handles to everything a test wants
/// to drive or inspect.
pub struct TestContext {
    pub client: CallClient,
    pub link: Arc<MockLink>,
    pub engine: Arc<MockEngine>,
    pub capture: Arc<MockCapture>,
    pub observer: Arc<MockObserver>,
    pub journal: Journal,
    frame_tx: mpsc::Sender<InboundFrame>,
}

pub fn create_test_client() -> TestContext {
    create_test_client_with_capture(MockCapture::granted())
}

pub fn create_test_client_with_capture(capture: MockCapture) -> TestContext {
    init_tracing();

    let journal = new_journal();
    let link = Arc::new(MockLink::new(journal.clone()));
    let engine = MockEngine::new(journal.clone());
    let capture = Arc::new(capture);
    let observer = Arc::new(MockObserver::new());
    let (frame_tx, frame_rx) = mpsc::channel(64);

    let client = CallClient::with_parts(
        CallConfig::default(),
        link.clone(),
        frame_rx,
        engine.clone(),
        capture.clone(),
        observer.clone(),
    );

    TestContext {
        client,
        link,
        engine,
        capture,
        observer,
        journal,
        frame_tx,
    }
}

impl TestContext {
    /// Deliver the relay's `id` event.
    pub async fn send_id(&self, id: &str) {
        self.frame_tx
            .send(InboundFrame::Id(PeerId::from(id)))
            .await
            .expect("manager stopped");
    }

    /// Deliver a negotiation message from a remote peer.
    pub async fn send_message(&self, from: &str, kind: &str, payload: Option<Value>) {
        self.frame_tx
            .send(InboundFrame::Message(InboundMessage {
                from: PeerId::from(from),
                kind: kind.to_owned(),
                payload,
            }))
            .await
            .expect("manager stopped");
    }
}
