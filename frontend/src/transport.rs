use gloo_net::http::Request;
use shared::{HttpReply, Result, ToggleError, Transport, FORM_CONTENT_TYPE};

#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn post_form(&self, url: &str, body: String) -> Result<HttpReply> {
        let response = Request::post(url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| ToggleError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(HttpReply::new(status, body))
    }
}
