//! Integration tests for the CLI subcommands.

#[cfg(test)]
mod tests {
    use hmedia_cli::{
        cli::{Commands, ShapeArg},
        client::ContentClient,
        commands::execute,
    };
    use hmedia_shared::{endpoints::Collection, ArticleCategory};
    use serde_json::{json, Value};
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mount_get(server: &MockServer, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn client_for(server: &MockServer) -> ContentClient {
        ContentClient::new(&server.uri()).expect("client")
    }

    #[tokio::test]
    async fn list_pages_banners_locally() {
        let server = MockServer::start().await;
        let banners: Vec<Value> = (1..=12)
            .map(|n| json!({ "id": n, "title": format!("banner {n}"), "status": "Active" }))
            .collect();
        mount_get(&server, "/banner/", Value::Array(banners)).await;

        let output = execute(
            &client_for(&server),
            Commands::List {
                collection: Collection::Banner,
                page: Some(9),
                per_page: 5,
            },
        )
        .await
        .expect("list");

        assert_eq!(output["collection"], "banner");
        assert_eq!(output["total"], 12);
        assert_eq!(output["page"]["current"], 3);
        assert_eq!(output["page"]["total_pages"], 3);
        assert_eq!(output["page"]["source"], "local");
        let titles: Vec<&str> = output["items"]
            .as_array()
            .expect("items")
            .iter()
            .filter_map(|item| item["title"].as_str())
            .collect();
        assert_eq!(titles, ["banner 11", "banner 12"]);
    }

    #[tokio::test]
    async fn list_follows_server_pagination_back_to_the_last_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/paginate"))
            .and(query_param("page", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 5, "limit": 12, "total": 20, "items": []
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/news/paginate"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 2, "limit": 12, "total": 20,
                "items": [{ "id": 13, "title": "Thirteen", "slug": "thirteen" }]
            })))
            .mount(&server)
            .await;

        let output = execute(
            &client_for(&server),
            Commands::List {
                collection: Collection::News,
                page: Some(5),
                per_page: 10,
            },
        )
        .await
        .expect("list");

        assert_eq!(output["page"]["current"], 2);
        assert_eq!(output["page"]["total_pages"], 2);
        assert_eq!(output["page"]["source"], "server");
        assert_eq!(output["items"][0]["slug"], "thirteen");
    }

    #[tokio::test]
    async fn list_without_page_returns_everything() {
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/teaser-and-promo/",
            json!([
                { "id": 1, "video_title": "Trailer", "video_url": "https://youtu.be/dQw4w9WgXcQ", "active_inactive": true },
                { "id": 2, "video_title": "Promo", "video_url": "https://youtu.be/aaaaaaaaaaa", "active_inactive": "false" }
            ]),
        )
        .await;

        let output = execute(
            &client_for(&server),
            Commands::List {
                collection: Collection::TeaserAndPromo,
                page: None,
                per_page: 10,
            },
        )
        .await
        .expect("list");

        assert_eq!(output["total"], 2);
        assert!(output.get("page").is_none());
        assert_eq!(output["items"][1]["active_inactive"], false);
    }

    #[tokio::test]
    async fn show_resolves_image_tags_and_reader_url() {
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/cinema-news/api/big-release",
            json!({
                "id": "abc",
                "title": "Big Release",
                "slug": "big-release",
                "image": "uploads\\cinema\\poster.jpg",
                "content": "<p>KOCHI: The film opens &amp; fans cheer.</p>",
                "date": "2024-01-05T10:00:00",
                "tags": ["[\"film\", \"release\"]"],
                "author": "  "
            }),
        )
        .await;

        let output = execute(
            &client_for(&server),
            Commands::Show {
                category: ArticleCategory::CinemaNews,
                slug: "big-release".to_string(),
                origin: "https://channelhmedia.in".to_string(),
            },
        )
        .await
        .expect("show");

        assert_eq!(output["image"], format!("{}/uploads/cinema/poster.jpg", server.uri()));
        assert_eq!(output["tags"], json!(["film", "release"]));
        assert_eq!(output["summary"], "The film opens & fans cheer.");
        assert_eq!(output["date"], "Jan 5 2024");
        assert_eq!(output["author"], Value::Null);
        assert_eq!(output["url"], "https://channelhmedia.in/cinema-news/big-release");
    }

    #[tokio::test]
    async fn show_reports_missing_article() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/api/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = execute(
            &client_for(&server),
            Commands::Show {
                category: ArticleCategory::LatestNews,
                slug: "gone".to_string(),
                origin: "https://channelhmedia.in".to_string(),
            },
        )
        .await
        .expect_err("missing");
        assert!(err.to_string().contains("article not found"));
    }

    #[tokio::test]
    async fn ads_select_enabled_matches_in_order() {
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/square-ads/",
            json!([
                { "id": 1, "title": "late", "image": "ads/1.jpg", "page_type": "home", "status": true, "order": 9 },
                { "id": 2, "title": "off", "image": "ads/2.jpg", "page_type": "Home", "status": false, "order": 1 },
                { "id": 3, "title": "first", "image": "ads/3.jpg", "page_type": "Home", "status": "true", "order": "2", "link": "#" },
                { "id": 4, "title": "elsewhere", "image": "ads/4.jpg", "page_type": "News Detail", "status": true, "order": 0 }
            ]),
        )
        .await;

        let output = execute(
            &client_for(&server),
            Commands::Ads {
                page: "home".to_string(),
                shape: Some(ShapeArg::Square),
            },
        )
        .await
        .expect("ads");

        assert_eq!(output["page"], "Home");
        assert!(output.get("banner").is_none());
        let square = output["square"].as_array().expect("square");
        let titles: Vec<&str> = square.iter().filter_map(|slot| slot["title"].as_str()).collect();
        assert_eq!(titles, ["first", "late"]);
        assert_eq!(square[0]["link"], Value::Null);
        assert_eq!(
            square[0],
            json!({
                "title": "first",
                "image": format!("{}/ads/3.jpg", server.uri()),
                "link": null,
                "show_contact": false
            })
        );
    }

    #[tokio::test]
    async fn ads_for_both_shapes_tolerate_one_failure() {
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/banner-ads/",
            json!([{ "id": 1, "title": "wide", "image": "ads/w.jpg", "page_type": "Home", "status": true, "order": 1 }]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/square-ads/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let output = execute(
            &client_for(&server),
            Commands::Ads {
                page: "Home".to_string(),
                shape: None,
            },
        )
        .await
        .expect("ads");

        assert_eq!(output["square"], json!([]));
        assert_eq!(output["banner"][0]["title"], "wide");
    }

    #[tokio::test]
    async fn ads_reject_unknown_page() {
        let server = MockServer::start().await;
        let err = execute(
            &client_for(&server),
            Commands::Ads {
                page: "Sports".to_string(),
                shape: None,
            },
        )
        .await
        .expect_err("unknown page");
        assert!(err.to_string().contains("unknown page"));
    }

    #[tokio::test]
    async fn flash_keeps_active_lines_newest_first() {
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/flash-news/",
            json!([
                { "id": 1, "title": "old", "status": "active", "created_at": "2024-01-01T00:00:00Z" },
                { "id": 2, "title": "hidden", "status": "inactive", "created_at": "2024-03-01T00:00:00Z" },
                { "id": 3, "title": "new", "status": "Active", "created_at": "2024-02-01T00:00:00Z" }
            ]),
        )
        .await;

        let output = execute(&client_for(&server), Commands::Flash).await.expect("flash");
        let titles: Vec<&str> = output
            .as_array()
            .expect("headlines")
            .iter()
            .filter_map(|line| line["title"].as_str())
            .collect();
        assert_eq!(titles, ["new", "old"]);
    }

    #[tokio::test]
    async fn login_validates_before_calling_the_api() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/login"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = execute(
            &client_for(&server),
            Commands::Login {
                username: "  ".to_string(),
                password: String::new(),
            },
        )
        .await
        .expect_err("invalid");
        assert!(err.to_string().contains("Username is required"));
    }

    #[tokio::test]
    async fn login_with_bad_credentials_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid credentials" })))
            .mount(&server)
            .await;

        let err = execute(
            &client_for(&server),
            Commands::Login {
                username: "editor".to_string(),
                password: "wrong".to_string(),
            },
        )
        .await
        .expect_err("401");
        assert!(err.to_string().contains("invalid username or password"));
    }

    #[tokio::test]
    async fn delete_reports_the_record() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/admin/square-ads/9"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let output = execute(
            &client_for(&server),
            Commands::Delete {
                collection: Collection::SquareAds,
                id: "9".to_string(),
                token: "tok".to_string(),
            },
        )
        .await
        .expect("delete");
        assert_eq!(output, json!({ "deleted": true, "collection": "square-ads", "id": "9" }));
    }
}
