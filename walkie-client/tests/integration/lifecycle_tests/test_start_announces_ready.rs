use crate::integration::{create_test_client, create_test_client_with_capture};
use crate::utils::{MockCapture, settle, wait_until};

#[tokio::test]
async fn start_arms_capture_and_announces_once() {
    let ctx = create_test_client();

    ctx.client.start("x").await.unwrap();

    assert!(
        wait_until(|| ctx.link.ready_names() == vec!["x".to_owned()], 1000).await,
        "exactly one readyToStream with the display name"
    );
    assert_eq!(ctx.observer.local_stream_count(), 1);
    assert_eq!(ctx.capture.create_count(), 1);
}

#[tokio::test]
async fn start_without_permission_is_a_silent_noop() {
    let ctx = create_test_client_with_capture(MockCapture::denied());

    ctx.client.start("x").await.unwrap();
    settle().await;

    assert!(ctx.link.ready_names().is_empty());
    assert_eq!(ctx.observer.local_stream_count(), 0);
}
