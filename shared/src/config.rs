pub const DEFAULT_BASE_URL: &str = "http://localhost:8888/v1/";
pub const TOGGLE_PATH: &str = "vswitch";

/// Where the toggle backend lives. Edit the base URL when the service is not
/// reachable on localhost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleConfig {
    pub base_url: String,
}

impl ToggleConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Plain concatenation, so the base URL must carry its own trailing slash.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TOGGLE_PATH)
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
