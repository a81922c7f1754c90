use crate::integration::create_test_client;
use crate::utils::{settle, wait_until};

#[tokio::test]
async fn double_teardown_triggers_remove_exactly_once() {
    let ctx = create_test_client();

    ctx.send_message("p1", "init", None).await;
    assert!(wait_until(|| ctx.engine.connections().len() == 1, 1000).await);
    let connection = ctx.engine.connections()[0].clone();

    // Both independent teardown triggers fire for the same peer.
    connection.emit_disconnected().await;
    connection.emit_stream_removed().await;
    settle().await;

    assert_eq!(
        ctx.observer.removed_slots(),
        vec![0],
        "exactly one UI removal notification"
    );
    assert_eq!(connection.close_count(), 1, "exactly one handle disposal");
}
