#[cfg(test)]
mod http_surface {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use kantnergasse::{
        config::{self, Config},
        listing::{filter_apartments, listings_for_seed},
        models::filter::FilterState,
        web::{pages::format_euro, router, AppState},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app(config: Config) -> Router {
        router(AppState {
            config: Arc::new(config),
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> Value {
        let (status, body) = get(app, uri).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn landing_page_renders_all_sections() {
        let (status, body) = get(app(config::create_test_config()), "/?seed=5").await;
        assert_eq!(status, StatusCode::OK);

        for anchor in [r#"id="projekt""#, r#"id="wohnungen""#, r#"id="lage""#, r#"id="kontakt""#] {
            assert!(body.contains(anchor), "missing {anchor}");
        }
        assert!(body.contains("Bauprojekt Kantnergasse 44"));
        assert!(body.contains("Anfrageformular"));
        assert!(body.contains(r#"name="seed" value="5""#));
        assert!(body.contains("Alle Rechte vorbehalten."));
    }

    #[tokio::test]
    async fn landing_page_shows_only_filtered_cards() {
        let uri = "/?seed=11&price_min=300000&price_max=600000&rooms_min=2&rooms_max=5";
        let (_, body) = get(app(config::create_test_config()), uri).await;

        let apartments = listings_for_seed(11);
        let mut filter = FilterState::default();
        filter.set_price_range((300_000, 600_000));
        filter.set_room_range((2, 5));
        let visible = filter_apartments(&apartments, &filter);

        for apartment in &apartments {
            let card = format!(r#"id="wohnung-{}""#, apartment.id);
            assert_eq!(body.contains(&card), visible.contains(&apartment));
        }
        for apartment in &visible {
            assert!(body.contains(&format!("Preis: {}", format_euro(apartment.price))));
        }
        assert!(body.contains(&format!(">{} von 20 Wohnungen<", visible.len())));
    }

    #[tokio::test]
    async fn landing_page_without_matches_shows_notice() {
        let apartments = listings_for_seed(3);
        let point = (200_000..=800_000u32)
            .find(|price| apartments.iter().all(|a| a.price != *price))
            .unwrap();

        let uri = format!("/?seed=3&price_min={point}&price_max={point}");
        let (status, body) = get(app(config::create_test_config()), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Keine Wohnungen entsprechen Ihren Filterkriterien."));
        assert!(body.contains(">0 von 20 Wohnungen<"));
    }

    #[tokio::test]
    async fn api_without_filter_returns_full_listing() {
        let json = get_json(app(config::create_test_config()), "/api/apartments?seed=21").await;
        let data = &json["data"];

        assert_eq!(data["seed"], 21);
        assert_eq!(data["total"], 20);
        assert_eq!(data["apartments"].as_array().unwrap().len(), 20);
        assert_eq!(data["filter"]["price"]["min"], 200_000);
        assert_eq!(data["filter"]["size"]["max"], 150);
    }

    #[tokio::test]
    async fn api_applies_all_three_ranges() {
        let json = get_json(
            app(config::create_test_config()),
            "/api/apartments?seed=8&price_min=250000&price_max=700000&rooms_min=2&rooms_max=4&size_min=60&size_max=120",
        )
        .await;

        for apartment in json["data"]["apartments"].as_array().unwrap() {
            let price = apartment["price"].as_u64().unwrap();
            let rooms = apartment["rooms"].as_u64().unwrap();
            let size = apartment["size"].as_u64().unwrap();
            assert!((250_000..=700_000).contains(&price));
            assert!((2..=4).contains(&rooms));
            assert!((60..=120).contains(&size));
        }
    }

    #[tokio::test]
    async fn api_is_stable_for_the_same_view() {
        let uri = "/api/apartments?seed=77&size_min=80";
        let first = get_json(app(config::create_test_config()), uri).await;
        let second = get_json(app(config::create_test_config()), uri).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn api_clamps_and_orders_bounds() {
        let json = get_json(
            app(config::create_test_config()),
            "/api/apartments?seed=1&price_min=900000&price_max=100000&rooms_max=9",
        )
        .await;
        let filter = &json["data"]["filter"];
        assert_eq!(filter["price"]["min"], 200_000);
        assert_eq!(filter["price"]["max"], 800_000);
        assert_eq!(filter["rooms"]["max"], 6);
    }

    #[tokio::test]
    async fn pinned_seed_overrides_view_seed() {
        let config = Config {
            listing_seed: Some(4242),
            ..config::create_test_config()
        };
        let json = get_json(app(config), "/api/apartments?seed=1").await;
        assert_eq!(json["data"]["seed"], 4242);
    }

    #[tokio::test]
    async fn fresh_view_gets_a_seed() {
        let json = get_json(app(config::create_test_config()), "/api/apartments").await;
        assert!(json["data"]["seed"].is_u64());
        assert_eq!(json["data"]["apartments"].as_array().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn malformed_bounds_are_rejected() {
        let (status, _) = get(app(config::create_test_config()), "/?price_min=cheap").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn serves_svg_assets_with_cors() {
        let response = app(config::create_test_config())
            .oneshot(Request::builder().uri("/logo.svg").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn preflight_is_answered_with_cors_headers() {
        let response = app(config::create_test_config())
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/apartments")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
    }

    #[tokio::test]
    async fn hero_and_download_buttons_are_inert() {
        let (_, body) = get(app(config::create_test_config()), "/?seed=2").await;
        assert!(body.contains(r#"<button type="button" class="btn">Mehr erfahren</button>"#));
        assert!(body.contains(r#"<button type="button" class="btn btn-outline">Exposé herunterladen</button>"#));
    }

    #[tokio::test]
    async fn health_check() {
        let (status, body) = get(app(config::create_test_config()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[test]
    fn euro_formatting_uses_german_separators() {
        assert_eq!(format_euro(200_000), "200.000 €");
        assert_eq!(format_euro(1_234_567), "1.234.567 €");
        assert_eq!(format_euro(999), "999 €");
    }
}
