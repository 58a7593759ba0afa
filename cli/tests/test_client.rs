//! Integration tests for the content API client.

#[cfg(test)]
mod tests {
    use hmedia_cli::client::ContentClient;
    use hmedia_shared::{ads::AdShape, endpoints::Collection, forms::LoginDraft, ApiError, ArticleCategory};
    use serde_json::json;
    use wiremock::{
        matchers::{body_string, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    async fn client_for(server: &MockServer) -> ContentClient {
        ContentClient::new(&server.uri()).expect("client")
    }

    #[tokio::test]
    async fn article_page_reads_the_paginated_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cinema-news/paginate"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 2,
                "limit": 12,
                "total": 30,
                "items": [{ "id": 7, "title": "Premiere", "slug": "premiere", "tags": "[\"film\"]" }]
            })))
            .mount(&server)
            .await;

        let page = client_for(&server)
            .await
            .article_page(Collection::CinemaNews, 2)
            .await
            .expect("page");
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].slug, "premiere");
        assert_eq!(page.items[0].id.to_string(), "7");
    }

    #[tokio::test]
    async fn missing_article_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/meet-person/api/nobody"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not found" })))
            .mount(&server)
            .await;

        let found = client_for(&server)
            .await
            .article(ArticleCategory::MeetPerson, "nobody")
            .await
            .expect("lookup");
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn server_errors_carry_the_detail_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/banner/"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "database offline" })))
            .mount(&server)
            .await;

        let err = client_for(&server).await.banners().await.expect_err("500");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                detail: Some("database offline".to_string())
            }
        );
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/square-ads/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.ads(AdShape::Square).await.expect_err("decode");
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn login_posts_form_and_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/login"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("username=editor&password=p%40ss%20word"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok-123",
                "token_type": "bearer"
            })))
            .mount(&server)
            .await;

        let draft = LoginDraft {
            username: " editor ".to_string(),
            password: "p@ss word".to_string(),
        };
        let token = client_for(&server).await.login(&draft).await.expect("login");
        assert_eq!(token, "tok-123");
    }

    #[tokio::test]
    async fn login_without_token_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token_type": "bearer" })))
            .mount(&server)
            .await;

        let draft = LoginDraft {
            username: "editor".to_string(),
            password: "secret".to_string(),
        };
        let err = client_for(&server).await.login(&draft).await.expect_err("no token");
        assert_eq!(err, ApiError::Unauthorized);
    }

    #[tokio::test]
    async fn delete_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/admin/flash-news/42"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .await
            .delete(Collection::FlashNews, "42", "tok-123")
            .await
            .expect("delete");
    }

    #[tokio::test]
    async fn rejected_token_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/admin/banner/1"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid token" })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .delete(Collection::Banner, "1", "stale")
            .await
            .expect_err("401");
        assert_eq!(err, ApiError::Unauthorized);
    }
}
