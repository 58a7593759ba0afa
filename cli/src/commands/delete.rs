use anyhow::{Context, Result};
use hmedia_shared::endpoints::Collection;
use serde_json::{json, Value};

use crate::client::ContentClient;

/// Delete one record.
pub async fn run(client: &ContentClient, collection: Collection, id: &str, token: &str) -> Result<Value> {
    client
        .delete(collection, id, token)
        .await
        .with_context(|| format!("failed to delete {collection}/{id}"))?;
    Ok(json!({
        "deleted": true,
        "collection": collection,
        "id": id,
    }))
}
