use crate::integration::create_test_client;
use crate::utils::{settle, wait_until};
use walkie_core::PeerId;

#[tokio::test]
async fn third_peer_is_silently_dropped() {
    let ctx = create_test_client();

    ctx.send_message("p1", "init", None).await;
    ctx.send_message("p2", "init", None).await;
    ctx.send_message("p3", "init", None).await;
    settle().await;

    assert_eq!(
        ctx.engine.connections().len(),
        2,
        "exactly MAX_PEERS sessions may exist"
    );
    assert!(ctx.engine.connection_for(&PeerId::from("p3")).is_none());

    // No side effect for the dropped peer: nothing was ever sent to it.
    assert!(ctx.link.messages_to(&PeerId::from("p3")).is_empty());

    // The first two negotiated normally.
    assert!(
        wait_until(|| !ctx.link.messages_to(&PeerId::from("p1")).is_empty(), 1000).await
    );
    assert!(
        wait_until(|| !ctx.link.messages_to(&PeerId::from("p2")).is_empty(), 1000).await
    );
}
