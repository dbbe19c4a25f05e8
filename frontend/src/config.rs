use shared::ToggleConfig;

pub struct Config {
    pub api_base_url: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            // change this when the backend is not reachable on localhost
            api_base_url: shared::DEFAULT_BASE_URL,
        }
    }

    pub fn toggle_config(&self) -> ToggleConfig {
        ToggleConfig::new(self.api_base_url)
    }
}

pub const CONFIG: Config = Config::new();
