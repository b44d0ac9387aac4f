//! Network URL constants for the coin catalog.

/// Default coin catalog endpoint.
pub const DEFAULT_API_URL: &str = "https://37656be98b8f42ae8348e4da3ee3193f.api.mockbin.io";
