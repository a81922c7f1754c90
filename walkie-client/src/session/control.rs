/// Lifecycle requests from the owning application, delivered to the session
/// manager's event loop through the [`CallClient`](crate::CallClient) handle.
#[derive(Debug)]
pub enum Control {
    /// Arm local capture and announce readiness to the relay. Only valid
    /// once capture permission is granted; without it, a silent no-op.
    Start { name: String },

    /// Suspend local capture without touching any session.
    Pause,

    /// Resume suspended capture.
    Resume,

    /// Bulk teardown: every connection handle, the capture source, the
    /// engine factory, and the signaling link.
    Destroy,
}
