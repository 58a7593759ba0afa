use anyhow::{bail, Result};
use hmedia_shared::{
    dates::display_date,
    media::image_url,
    share::article_url,
    summary::{summarize, META_DESCRIPTION_CHARS},
    tags, ArticleCategory,
};
use serde::Serialize;
use serde_json::Value;

use super::to_json;
use crate::client::ContentClient;

/// An article as the detail page presents it.
#[derive(Debug, Serialize)]
struct ArticleView {
    id: String,
    category: &'static str,
    title: String,
    slug: String,
    author: Option<String>,
    date: Option<String>,
    image: Option<String>,
    tags: Vec<String>,
    summary: String,
    trending: bool,
    url: String,
}

/// Show one article by category and slug.
pub async fn run(
    client: &ContentClient,
    category: ArticleCategory,
    slug: &str,
    origin: &str,
) -> Result<Value> {
    let Some(record) = client.article(category, slug).await? else {
        bail!("article not found: {}/{}", category.token(), slug);
    };

    to_json(&ArticleView {
        id: record.id.to_string(),
        category: category.token(),
        date: record.display_date_raw().and_then(display_date),
        image: record
            .image
            .as_deref()
            .and_then(|path| image_url(client.base(), path)),
        tags: tags::normalize(&record.tags),
        summary: summarize(&record.content, META_DESCRIPTION_CHARS),
        trending: record.trending,
        url: article_url(origin, category, &record.slug),
        author: record.author.filter(|author| !author.trim().is_empty()),
        title: record.title,
        slug: record.slug,
    })
}
