use serde::{Deserialize, Serialize};

/// Media and transport parameters for one client instance.
///
/// Immutable for the lifetime of a session manager; the capture source and
/// the transport engine read from it, nothing mutates it after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallConfig {
    pub video_enabled: bool,
    pub loopback: bool,
    pub video_width: u32,
    pub video_height: u32,
    pub video_fps: u32,
    pub video_start_bitrate: u32,
    pub video_codec: String,
    pub hardware_acceleration: bool,
    pub audio_start_bitrate: u32,
    pub audio_codec: String,
    pub cpu_overuse_detection: bool,
    pub stun_servers: Vec<String>,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            video_enabled: true,
            loopback: false,
            video_width: 1280,
            video_height: 720,
            video_fps: 30,
            video_start_bitrate: 1000,
            video_codec: "VP9".to_owned(),
            hardware_acceleration: true,
            audio_start_bitrate: 32,
            audio_codec: "opus".to_owned(),
            cpu_overuse_detection: true,
            stun_servers: vec![
                "stun:23.21.150.121".to_owned(),
                "stun:stun.l.google.com:19302".to_owned(),
            ],
        }
    }
}
