//! Payment token creation.

use serde::Deserialize;

use super::{Client, ClientError};
use crate::objects::token::{MODE_SANDBOX, Token, TokenSettings, new_ui_settings};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TokenResponse {
    token: String,
}

impl Client {
    /// Build default [`TokenSettings`] for this client: the project id,
    /// the sandbox mode string when the client is in sandbox, and the
    /// default UI settings.  Pure, no network call.
    pub fn new_token_settings(&self) -> TokenSettings {
        TokenSettings {
            project_id: self.project_id(),
            ui: new_ui_settings(),
            mode: self.is_sandbox().then(|| MODE_SANDBOX.to_owned()),
            return_url: None,
        }
    }

    /// `POST merchants/{merchant_id}/token` — create a payment token for
    /// the hosted checkout, returning the opaque token string.
    pub async fn create_token(&self, token: &Token) -> Result<String, ClientError> {
        let url = self.merchant_url("token");
        let payload: TokenResponse = self.post_json(url, token).await?;
        Ok(payload.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Credentials;
    use serde_json::json;

    fn test_client(sandbox: bool) -> Client {
        Client::new(Credentials {
            merchant_id: 7,
            merchant_secret: "merchant-secret".to_owned(),
            project_id: 42,
            project_secret: "project-secret".to_owned(),
        })
        .sandbox(sandbox)
    }

    #[test]
    fn sandbox_sets_the_mode_string() {
        let settings = test_client(true).new_token_settings();
        assert_eq!(settings.project_id, 42);
        assert_eq!(settings.mode.as_deref(), Some(MODE_SANDBOX));
        assert_eq!(settings.ui["version"], json!("desktop"));
    }

    #[test]
    fn live_mode_is_omitted() {
        let settings = test_client(false).new_token_settings();
        assert_eq!(settings.mode, None);
        let encoded = serde_json::to_value(&settings).unwrap();
        assert!(encoded.get("mode").is_none());
    }

    #[test]
    fn token_response_extracts_the_token_field() {
        let payload: TokenResponse =
            serde_json::from_value(json!({"token": "tok_abc123"})).unwrap();
        assert_eq!(payload.token, "tok_abc123");
    }
}
