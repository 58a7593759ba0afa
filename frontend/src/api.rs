use gloo_net::http::{Request, RequestBuilder, Response};
use hmedia_shared::{
    ads::AdShape,
    endpoints::{join, Collection, LOGIN_PATH, LOGOUT_PATH},
    forms::{LoginDraft, MultipartDraft},
    models::{Advertisement, ArticleRecord, Banner, FlashNews, LoginResponse, Paginated, Teaser},
    ApiError, ArticleCategory,
};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::config::API_BASE;

fn url(path: &str) -> String {
    join(API_BASE, path)
}

fn network_error(err: impl std::fmt::Debug) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&url(path))
        .send()
        .await
        .map_err(network_error)?;
    decode(check(response).await?).await
}

/// Full article collection.
pub async fn fetch_articles(collection: Collection) -> Result<Vec<ArticleRecord>, ApiError> {
    get_json(&collection.list_path()).await
}

/// Most recent articles of a collection, for home page sections.
pub async fn fetch_articles_limit(collection: Collection) -> Result<Vec<ArticleRecord>, ApiError> {
    get_json(&collection.limit_path()).await
}

/// One server page of an article collection.
pub async fn fetch_article_page(
    collection: Collection,
    page: usize,
) -> Result<Paginated<ArticleRecord>, ApiError> {
    get_json(&collection.paginate_path(page)).await
}

/// Single article by category and slug. Missing records and failed
/// requests both come back as `None`.
pub async fn fetch_article(category: ArticleCategory, slug: &str) -> Option<ArticleRecord> {
    match get_json::<ArticleRecord>(&category.detail_path(slug)).await {
        Ok(record) => Some(record),
        Err(e) => {
            let level = if e.is_not_found() { "not found" } else { "failed" };
            web_sys::console::warn_1(
                &format!("Article {}/{} {}: {}", category, slug, level, e).into(),
            );
            None
        },
    }
}

pub async fn fetch_banners() -> Result<Vec<Banner>, ApiError> {
    get_json(&Collection::Banner.list_path()).await
}

pub async fn fetch_flash_news() -> Result<Vec<FlashNews>, ApiError> {
    get_json(&Collection::FlashNews.list_path()).await
}

pub async fn fetch_teasers() -> Result<Vec<Teaser>, ApiError> {
    get_json(&Collection::TeaserAndPromo.list_path()).await
}

pub async fn fetch_teasers_limit() -> Result<Vec<Teaser>, ApiError> {
    get_json(&Collection::TeaserAndPromo.limit_path()).await
}

pub async fn fetch_teaser_page(page: usize) -> Result<Paginated<Teaser>, ApiError> {
    get_json(&Collection::TeaserAndPromo.paginate_path(page)).await
}

/// Every ad of one shape; placement happens client-side.
pub async fn fetch_ads(shape: AdShape) -> Result<Vec<Advertisement>, ApiError> {
    get_json(&shape.collection().list_path()).await
}

/// Exchange credentials for a bearer token.
pub async fn login(draft: &LoginDraft) -> Result<String, ApiError> {
    let response = Request::post(&url(LOGIN_PATH))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(draft.form_body())
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    let login: LoginResponse = decode(check(response).await?).await?;
    login
        .access_token
        .filter(|token| !token.trim().is_empty())
        .ok_or(ApiError::Unauthorized)
}

/// Authenticated admin access. Holding one is the only way to reach the
/// write endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminClient {
    token: String,
}

impl AdminClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {}", self.token))
    }

    fn multipart(draft: &impl MultipartDraft, image: Option<&File>) -> Result<FormData, ApiError> {
        let form = FormData::new().map_err(network_error)?;
        for (name, value) in draft.text_fields() {
            form.append_with_str(name, &value).map_err(network_error)?;
        }
        if let Some(file) = image {
            form.append_with_blob_and_filename("image", file, &file.name())
                .map_err(network_error)?;
        }
        Ok(form)
    }

    /// Create a record from a validated draft.
    pub async fn create(
        &self,
        collection: Collection,
        draft: &impl MultipartDraft,
        image: Option<&File>,
    ) -> Result<(), ApiError> {
        let form = Self::multipart(draft, image)?;
        let response = self
            .authorize(Request::post(&url(&collection.admin_path())))
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        check(response).await.map(|_| ())
    }

    /// Replace a record. `image` is only sent when a new file was picked.
    pub async fn update(
        &self,
        collection: Collection,
        id: &str,
        draft: &impl MultipartDraft,
        image: Option<&File>,
    ) -> Result<(), ApiError> {
        let form = Self::multipart(draft, image)?;
        let response = self
            .authorize(Request::put(&url(&collection.admin_item_path(id))))
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        check(response).await.map(|_| ())
    }

    pub async fn delete(&self, collection: Collection, id: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::delete(&url(&collection.admin_item_path(id))))
            .send()
            .await
            .map_err(network_error)?;
        check(response).await.map(|_| ())
    }

    /// Revoke the token server-side. The caller forgets it either way.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::post(&url(LOGOUT_PATH)))
            .send()
            .await
            .map_err(network_error)?;
        check(response).await.map(|_| ())
    }
}
