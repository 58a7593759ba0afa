//! Native client for the content API.

use std::time::Duration;

use anyhow::{Context, Result};
use hmedia_shared::{
    ads::AdShape,
    endpoints::{join, Collection, LOGIN_PATH, LOGOUT_PATH},
    forms::LoginDraft,
    models::{Advertisement, ArticleRecord, Banner, FlashNews, LoginResponse, Paginated, Teaser},
    ApiError, ArticleCategory,
};
use reqwest::{header::CONTENT_TYPE, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

const REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Handle on one content API deployment.
#[derive(Debug, Clone)]
pub struct ContentClient {
    base: String,
    http: reqwest::Client,
}

impl ContentClient {
    /// Client for the API rooted at `base`.
    pub fn new(base: &str) -> Result<Self> {
        let parsed = Url::parse(base.trim()).with_context(|| format!("invalid API base URL: {base}"))?;
        anyhow::ensure!(
            matches!(parsed.scheme(), "http" | "https"),
            "API base URL must be http or https: {base}"
        );
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            base: base.trim().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Base URL, without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        join(&self.base, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        check(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.send(self.http.get(&url)).await?;
        decode(response).await
    }

    /// Every record of an article collection.
    pub async fn articles(&self, collection: Collection) -> Result<Vec<ArticleRecord>, ApiError> {
        self.get_json(&collection.list_path()).await
    }

    /// One server page of an article collection.
    pub async fn article_page(
        &self,
        collection: Collection,
        page: usize,
    ) -> Result<Paginated<ArticleRecord>, ApiError> {
        self.get_json(&collection.paginate_path(page)).await
    }

    /// Article by slug. `None` when the API does not know it.
    pub async fn article(
        &self,
        category: ArticleCategory,
        slug: &str,
    ) -> Result<Option<ArticleRecord>, ApiError> {
        match self.get_json(&category.detail_path(slug)).await {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Home page hero banners.
    pub async fn banners(&self) -> Result<Vec<Banner>, ApiError> {
        self.get_json(&Collection::Banner.list_path()).await
    }

    /// All flash-news lines, active or not.
    pub async fn flash_news(&self) -> Result<Vec<FlashNews>, ApiError> {
        self.get_json(&Collection::FlashNews.list_path()).await
    }

    /// Every teaser.
    pub async fn teasers(&self) -> Result<Vec<Teaser>, ApiError> {
        self.get_json(&Collection::TeaserAndPromo.list_path()).await
    }

    /// One server page of teasers.
    pub async fn teaser_page(&self, page: usize) -> Result<Paginated<Teaser>, ApiError> {
        self.get_json(&Collection::TeaserAndPromo.paginate_path(page)).await
    }

    /// Every ad of one shape.
    pub async fn ads(&self, shape: AdShape) -> Result<Vec<Advertisement>, ApiError> {
        self.get_json(&shape.collection().list_path()).await
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, draft: &LoginDraft) -> Result<String, ApiError> {
        let request = self
            .http
            .post(self.url(LOGIN_PATH))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(draft.form_body());
        let login: LoginResponse = decode(self.send(request).await?).await?;
        login
            .access_token
            .filter(|token| !token.trim().is_empty())
            .ok_or(ApiError::Unauthorized)
    }

    /// Revoke `token`.
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let request = self.http.post(self.url(LOGOUT_PATH)).bearer_auth(token);
        self.send(request).await.map(|_| ())
    }

    /// Delete one record with admin rights.
    pub async fn delete(&self, collection: Collection, id: &str, token: &str) -> Result<(), ApiError> {
        let url = self.url(&collection.admin_item_path(id));
        tracing::info!(%url, "DELETE");
        self.send(self.http.delete(&url).bearer_auth(token)).await.map(|_| ())
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status.as_u16(), &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_normalized() {
        let client = ContentClient::new(" http://localhost:8000/ ").expect("client");
        assert_eq!(client.base(), "http://localhost:8000");
        assert_eq!(client.url("/news/"), "http://localhost:8000/news/");
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(ContentClient::new("ftp://example.com").is_err());
        assert!(ContentClient::new("not a url").is_err());
    }
}
