use anyhow::{anyhow, Result};
use hmedia_shared::ads::{slots_for_page, AdShape, AdSlot, PlacementPage};
use serde::Serialize;
use serde_json::Value;

use super::to_json;
use crate::client::ContentClient;

#[derive(Debug, Serialize)]
struct Placement {
    page: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    square: Option<Vec<AdSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    banner: Option<Vec<AdSlot>>,
}

/// Ads `page_name` renders. With both shapes requested a failed fetch leaves
/// that shape empty, as on the site; a single requested shape must load.
pub async fn run(client: &ContentClient, page_name: &str, shape: Option<AdShape>) -> Result<Value> {
    let page = PlacementPage::from_label(page_name).ok_or_else(|| {
        let known: Vec<&str> = PlacementPage::ALL.iter().map(|page| page.label()).collect();
        anyhow!("unknown page `{page_name}` (expected one of: {})", known.join(", "))
    })?;

    let mut placement = Placement {
        page: page.label(),
        square: None,
        banner: None,
    };
    match shape {
        Some(shape) => {
            let ads = client.ads(shape).await?;
            let slots = slots_for_page(client.base(), &ads, page, shape);
            match shape {
                AdShape::Square => placement.square = Some(slots),
                AdShape::Banner => placement.banner = Some(slots),
            }
        },
        None => {
            let (square, banner) = tokio::join!(client.ads(AdShape::Square), client.ads(AdShape::Banner));
            let square = square.unwrap_or_else(|e| {
                tracing::warn!("failed to fetch square ads: {e}");
                Vec::new()
            });
            let banner = banner.unwrap_or_else(|e| {
                tracing::warn!("failed to fetch banner ads: {e}");
                Vec::new()
            });
            placement.square = Some(slots_for_page(client.base(), &square, page, AdShape::Square));
            placement.banner = Some(slots_for_page(client.base(), &banner, page, AdShape::Banner));
        },
    }
    to_json(&placement)
}
