mod capture;

pub use capture::{CaptureSource, LocalMedia, RemoteMedia, StaticCapture};
