use anyhow::{bail, Result};
use hmedia_shared::{forms::LoginDraft, ApiError};
use serde_json::{json, Value};

use crate::client::ContentClient;

/// Sign in and return the admin token.
pub async fn login(client: &ContentClient, username: String, password: String) -> Result<Value> {
    let draft = LoginDraft {
        username,
        password,
    };
    if let Err(errors) = draft.validate() {
        let messages: Vec<&str> = errors.fields().filter_map(|field| errors.get(field)).collect();
        bail!("{}", messages.join("; "));
    }

    match client.login(&draft).await {
        Ok(token) => {
            tracing::info!("signed in as {}", draft.username.trim());
            Ok(json!({ "access_token": token }))
        },
        Err(ApiError::Unauthorized) => bail!("invalid username or password"),
        Err(e) => bail!("login failed: {}", e.user_message(&e.to_string())),
    }
}

/// Revoke an admin token.
pub async fn logout(client: &ContentClient, token: &str) -> Result<Value> {
    client.logout(token).await?;
    Ok(json!({ "logged_out": true }))
}
