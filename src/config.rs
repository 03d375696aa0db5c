//! Application configuration.
//!
//! Centralized configuration for the PolydisVae frontend.
//! The generation server is a fixed external endpoint; there is no
//! environment-based override.

/// Generation API base URL.
///
/// The demo server hosting the PolydisVae model.
pub const API_BASE_URL: &str = "https://mgap-demo-api.sawapipipi.mydns.jp";

/// Path of the PolydisVae mix endpoint, relative to [`API_BASE_URL`].
pub const GENERATE_MIX_PATH: &str = "/generate/polydis-vae/mix";

/// Application name.
///
/// Used for the document title and the header logo.
pub const APP_NAME: &str = "PolydisVae";

/// MIME types accepted by the standalone audio picker.
pub const SUPPORTED_AUDIO_TYPES: [&str; 3] = ["audio/mpeg", "video/mp4", "audio/wav"];

/// Advertised size cap for the standalone audio picker (in bytes).
///
/// 5 MB limit. Display text only; the server enforces its own limit.
pub const MAX_AUDIO_FILE_SIZE: u32 = 5 * 1024 * 1024;
