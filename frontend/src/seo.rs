use hmedia_shared::{
    share::article_url,
    summary::{summarize, META_DESCRIPTION_CHARS},
    tags, ArticleCategory, ArticleRecord,
};
use web_sys::{window, Document, Element};

use crate::config::{self, DEFAULT_DESCRIPTION, DEFAULT_OG_IMAGE, SITE_NAME};

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn head() -> Option<Element> {
    let doc = document()?;
    doc.query_selector("head").ok().flatten()
}

fn upsert_head_element(selector: &str, tag_name: &str) -> Option<Element> {
    let doc = document()?;
    if let Some(found) = doc.query_selector(selector).ok().flatten() {
        return Some(found);
    }
    let head = head()?;
    let created = doc.create_element(tag_name).ok()?;
    let _ = head.append_child(&created);
    Some(created)
}

fn set_meta_name(name: &str, content: &str) {
    let selector = format!("meta[name=\"{}\"]", name);
    let Some(element) = upsert_head_element(&selector, "meta") else {
        return;
    };
    let _ = element.set_attribute("name", name);
    let _ = element.set_attribute("content", content);
}

fn set_meta_property(property: &str, content: &str) {
    let selector = format!("meta[property=\"{}\"]", property);
    let Some(element) = upsert_head_element(&selector, "meta") else {
        return;
    };
    let _ = element.set_attribute("property", property);
    let _ = element.set_attribute("content", content);
}

fn set_link_canonical(url: &str) {
    let Some(element) = upsert_head_element("link[rel=\"canonical\"]", "link") else {
        return;
    };
    let _ = element.set_attribute("rel", "canonical");
    let _ = element.set_attribute("href", url);
}

pub fn set_document_title(title: &str) {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(title);
}

fn page_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{} | {}", title, SITE_NAME)
    }
}

fn absolute_url(path_or_url: &str) -> String {
    let trimmed = path_or_url.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        return trimmed.to_string();
    }
    hmedia_shared::endpoints::join(&config::site_origin(), trimmed)
}

fn apply_common_seo(title: &str, description: &str, canonical_url: &str, og_type: &str, image: &str) {
    let description = if description.trim().is_empty() { DEFAULT_DESCRIPTION } else { description };

    set_document_title(title);
    set_link_canonical(canonical_url);

    set_meta_name("description", description);
    set_meta_name("twitter:card", "summary_large_image");
    set_meta_name("twitter:title", title);
    set_meta_name("twitter:description", description);
    set_meta_name("twitter:image", image);

    set_meta_property("og:type", og_type);
    set_meta_property("og:site_name", SITE_NAME);
    set_meta_property("og:title", title);
    set_meta_property("og:description", description);
    set_meta_property("og:url", canonical_url);
    set_meta_property("og:image", image);
}

/// Site-wide metadata for listing pages. `section` is the visible page name.
pub fn apply_default_seo(section: &str, path: &str) {
    apply_common_seo(
        &page_title(section),
        DEFAULT_DESCRIPTION,
        &absolute_url(path),
        "website",
        &absolute_url(DEFAULT_OG_IMAGE),
    );
    set_meta_name("keywords", "");
}

/// Article metadata: headline title, summarized body, tag keywords and the
/// article image for link previews.
pub fn apply_article_seo(category: ArticleCategory, article: &ArticleRecord) {
    let canonical = article_url(&config::site_origin(), category, &article.slug);
    let description = summarize(&article.content, META_DESCRIPTION_CHARS);
    let image = config::image_url(article.image.as_deref())
        .unwrap_or_else(|| absolute_url(DEFAULT_OG_IMAGE));

    apply_common_seo(&page_title(&article.title), &description, &canonical, "article", &image);

    let keywords = tags::keywords(&tags::normalize(&article.tags));
    set_meta_name("keywords", &keywords);
    if let Some(author) = article.author.as_deref().filter(|author| !author.trim().is_empty()) {
        set_meta_name("author", author);
    }
}
