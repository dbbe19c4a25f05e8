use serde::{Serialize, Deserialize};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleRequest {
    pub environment: String,
    pub toggle: String,
}

impl ToggleRequest {
    pub fn new(environment: impl Into<String>, toggle: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            toggle: toggle.into(),
        }
    }

    pub fn on(environment: impl Into<String>) -> Self {
        Self::new(environment, "true")
    }

    pub fn off(environment: impl Into<String>) -> Self {
        Self::new(environment, "false")
    }

    pub fn form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("environment", &self.environment)
            .append_pair("toggle", &self.toggle)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    // Same rule a jQuery success callback follows.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status) || self.status == 304
    }

    pub fn envelope(&self) -> Option<ToggleResponse> {
        serde_json::from_str(&self.body).ok()
    }
}

/// JSON envelope the vswitch backend answers with. Only read for logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToggleResponse {
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
