use crate::integration::create_test_client;
use crate::utils::{settle, wait_until};
use serde_json::json;
use walkie_core::SdpKind;

#[tokio::test]
async fn remote_answer_creates_nothing_locally() {
    let ctx = create_test_client();

    ctx.send_message("p1", "init", None).await;
    ctx.send_message(
        "p1",
        "answer",
        Some(json!({"type": "answer", "sdp": "v=0 remote-answer"})),
    )
    .await;

    assert!(wait_until(|| ctx.engine.connections().len() == 1, 1000).await);
    let connection = ctx.engine.connections()[0].clone();

    assert!(wait_until(|| connection.remote_descriptions().len() == 1, 1000).await);
    assert_eq!(connection.remote_descriptions()[0].kind, SdpKind::Answer);

    settle().await;
    assert_eq!(
        connection.answers_requested(),
        0,
        "an inbound answer must not trigger local answer creation"
    );
    assert_eq!(connection.offers_requested(), 1, "only the init-driven offer");
}
