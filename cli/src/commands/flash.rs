use anyhow::Result;
use hmedia_shared::{dates::display_date, feed::active_flash_news, models::Timestamped};
use serde::Serialize;
use serde_json::Value;

use super::to_json;
use crate::client::ContentClient;

#[derive(Debug, Serialize)]
struct Headline {
    id: String,
    title: String,
    date: Option<String>,
}

/// Ticker lines exactly as the reader site shows them.
pub async fn run(client: &ContentClient) -> Result<Value> {
    let headlines: Vec<Headline> = active_flash_news(client.flash_news().await?)
        .into_iter()
        .map(|item| Headline {
            id: item.id.to_string(),
            date: item.created_at().and_then(display_date),
            title: item.title,
        })
        .collect();
    to_json(&headlines)
}
