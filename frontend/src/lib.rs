use std::rc::Rc;
use wasm_bindgen::prelude::*;
use shared::{ToggleClient, ToggleConfig, ToggleOutcome};

mod config;
pub mod log;
pub mod reload;
pub mod transport;

pub use crate::config::CONFIG;
pub use crate::reload::WindowReloader;
pub use crate::transport::GlooTransport;

pub type BrowserClient = ToggleClient<GlooTransport, WindowReloader>;

pub fn browser_client(config: ToggleConfig) -> BrowserClient {
    ToggleClient::new(config, GlooTransport, WindowReloader)
}

/// Runs one toggle on the browser event loop and returns immediately.
pub fn spawn_toggle(client: Rc<BrowserClient>, environment: String, value: String) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = client.try_toggle(&environment, &value).await;
        match &outcome {
            ToggleOutcome::Reloaded { .. } => log::info(&outcome.to_string()),
            ToggleOutcome::Rejected { .. } => log::warn(&outcome.to_string()),
            ToggleOutcome::Failed(_) => log::error(&outcome.to_string()),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Toggles `environment` against the default backend and reloads on success.
#[wasm_bindgen]
pub fn toggle(environment: String, value: String) {
    spawn_toggle(Rc::new(browser_client(CONFIG.toggle_config())), environment, value);
}

#[wasm_bindgen]
pub struct VSwitch {
    client: Rc<BrowserClient>,
}

#[wasm_bindgen]
impl VSwitch {
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: Option<String>) -> VSwitch {
        let config = base_url
            .map(ToggleConfig::new)
            .unwrap_or_else(|| CONFIG.toggle_config());
        VSwitch { client: Rc::new(browser_client(config)) }
    }

    #[wasm_bindgen(getter = baseUrl)]
    pub fn base_url(&self) -> String {
        self.client.config().base_url.clone()
    }

    pub fn toggle(&self, environment: String, value: String) {
        spawn_toggle(self.client.clone(), environment, value);
    }
}
