//! Social share links for article pages.

use crate::category::ArticleCategory;

/// Public URL of an article on the reader site.
pub fn article_url(origin: &str, category: ArticleCategory, slug: &str) -> String {
    crate::endpoints::join(origin, &category.article_path(slug))
}

/// Facebook share dialog for `url`.
pub fn facebook_share_url(url: &str) -> String {
    format!("https://www.facebook.com/sharer/sharer.php?u={}", urlencoding::encode(url))
}

/// WhatsApp message with the title, an optional description and the link,
/// separated by blank lines.
pub fn whatsapp_share_url(title: &str, description: &str, url: &str) -> String {
    let text = format!("{title}\n\n{description}\n\n{url}");
    format!("https://wa.me/?text={}", urlencoding::encode(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_links() {
        let url = article_url("https://channelhmedia.in/", ArticleCategory::CinemaNews, "new-film");
        assert_eq!(url, "https://channelhmedia.in/cinema-news/new-film");
        assert_eq!(
            facebook_share_url(&url),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fchannelhmedia.in%2Fcinema-news%2Fnew-film"
        );
    }

    #[test]
    fn whatsapp_message_layout() {
        let link = whatsapp_share_url("Title", "", "https://x.in/news/a");
        assert_eq!(link, "https://wa.me/?text=Title%0A%0A%0A%0Ahttps%3A%2F%2Fx.in%2Fnews%2Fa");
    }
}
