use crate::integration::create_test_client;
use crate::utils::{settle, wait_until};

#[tokio::test]
async fn pause_and_resume_are_noops_before_start() {
    let ctx = create_test_client();

    ctx.client.pause().await.unwrap();
    ctx.client.resume().await.unwrap();
    settle().await;

    assert_eq!(ctx.capture.pause_count(), 0);
    assert_eq!(ctx.capture.resume_count(), 0);
}

#[tokio::test]
async fn pause_and_resume_reach_capture_after_start() {
    let ctx = create_test_client();

    ctx.client.start("x").await.unwrap();
    assert!(wait_until(|| ctx.capture.create_count() == 1, 1000).await);

    ctx.client.pause().await.unwrap();
    assert!(wait_until(|| ctx.capture.pause_count() == 1, 1000).await);

    ctx.client.resume().await.unwrap();
    assert!(wait_until(|| ctx.capture.resume_count() == 1, 1000).await);
}
