use crate::integration::create_test_client;
use crate::utils::wait_until;
use walkie_core::ConnectivityState;

#[tokio::test]
async fn ice_disconnect_tears_the_session_down() {
    let ctx = create_test_client();

    ctx.send_message("p1", "init", None).await;
    assert!(wait_until(|| ctx.engine.connections().len() == 1, 1000).await);
    let connection = ctx.engine.connections()[0].clone();

    connection.emit_disconnected().await;

    assert!(
        wait_until(|| connection.close_count() == 1, 1000).await,
        "disconnect must close the handle"
    );
    assert_eq!(ctx.observer.removed_slots(), vec![0]);

    let statuses = ctx.observer.statuses();
    assert_eq!(
        statuses.last(),
        Some(&ConnectivityState::Disconnected),
        "the user sees the disconnect"
    );

    // Removal notification precedes the status change, matching the
    // teardown-then-notify order.
    let events = ctx.observer.events();
    let remove_pos = events
        .iter()
        .position(|e| matches!(e, crate::utils::ObserverEvent::RemoveRemote(_)))
        .unwrap();
    let status_pos = events
        .iter()
        .rposition(|e| {
            matches!(
                e,
                crate::utils::ObserverEvent::Status(ConnectivityState::Disconnected)
            )
        })
        .unwrap();
    assert!(remove_pos < status_pos);
}
