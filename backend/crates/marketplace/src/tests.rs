//! Scenario tests for the marketplace crate
//! Use case rules and the authenticated HTTP route, against in-memory
//! repositories.

#[cfg(test)]
mod create_ad_tests {
    use std::sync::Arc;

    use kernel::id::UserId;

    use crate::application::create_ad::{CreateAdInput, CreateAdUseCase};
    use crate::domain::value_objects::AdValidationError;
    use crate::error::MarketplaceError;
    use crate::infra::memory::InMemoryAdRepository;

    fn input() -> CreateAdInput {
        CreateAdInput {
            title: "Bicycle".into(),
            content: "Barely used, new tyres".into(),
            image_url: "https://img.example/bike.png".into(),
            price: 120.5,
        }
    }

    fn use_case(repo: &InMemoryAdRepository) -> CreateAdUseCase<InMemoryAdRepository> {
        CreateAdUseCase::new(Arc::new(repo.clone()))
    }

    fn assert_invalid(err: MarketplaceError, expected: AdValidationError) {
        match err {
            MarketplaceError::Validation(actual) => assert_eq!(actual, expected),
            other => panic!("expected Validation({expected:?}), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_ad_stores_under_author() {
        let repo = InMemoryAdRepository::new();
        let author = UserId::new();

        let ad = use_case(&repo).execute(author, input()).await.unwrap();
        assert_eq!(ad.user_id, author);
        assert_eq!(ad.title.as_str(), "Bicycle");
        assert_eq!(ad.price.value(), 120.5);

        assert_eq!(repo.ads_by_user(&author).await, vec![ad]);
        assert!(repo.ads_by_user(&UserId::new()).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_ad_rejects_each_rule() {
        let repo = InMemoryAdRepository::new();
        let author = UserId::new();

        let cases = [
            (
                CreateAdInput {
                    title: "ab".into(),
                    ..input()
                },
                AdValidationError::TitleLength(2),
            ),
            (
                CreateAdInput {
                    content: "c".repeat(1001),
                    ..input()
                },
                AdValidationError::ContentLength(1001),
            ),
            (
                CreateAdInput {
                    image_url: "u".repeat(256),
                    ..input()
                },
                AdValidationError::ImageUrlTooLong(256),
            ),
            (
                CreateAdInput {
                    price: -1.0,
                    ..input()
                },
                AdValidationError::InvalidPrice(-1.0),
            ),
        ];
        for (bad, expected) in cases {
            let err = use_case(&repo).execute(author, bad).await.unwrap_err();
            assert_invalid(err, expected);
        }

        assert!(repo.ads_by_user(&author).await.is_empty());
    }

    #[tokio::test]
    async fn test_free_ad_without_image() {
        let repo = InMemoryAdRepository::new();
        let ad = use_case(&repo)
            .execute(
                UserId::new(),
                CreateAdInput {
                    image_url: String::new(),
                    price: 0.0,
                    ..input()
                },
            )
            .await
            .unwrap();
        assert_eq!(ad.image_url.as_str(), "");
        assert_eq!(ad.price.value(), 0.0);
    }
}

#[cfg(test)]
mod http_tests {
    use std::time::Duration;

    use auth::{AuthConfig, AuthEngine, InMemoryAuthRepository};
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, Response, StatusCode};
    use kernel::id::UserId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryAdRepository;
    use crate::presentation::router::marketplace_routes;

    const ACCESS: &str = "X-Access-Token";

    struct Harness {
        app: Router,
        ads: InMemoryAdRepository,
        engine: AuthEngine<InMemoryAuthRepository>,
    }

    fn harness_with(config: AuthConfig) -> Harness {
        let ads = InMemoryAdRepository::new();
        let engine = AuthEngine::new(InMemoryAuthRepository::new(), config);
        Harness {
            app: marketplace_routes(ads.clone(), engine.clone()),
            ads,
            engine,
        }
    }

    fn harness() -> Harness {
        harness_with(AuthConfig::new("test-password-salt", "test-token-salt"))
    }

    async fn sign_up(engine: &AuthEngine<InMemoryAuthRepository>, login: &str) -> (UserId, String) {
        let user = engine
            .register(login.to_string(), "Secret123".to_string())
            .await
            .unwrap();
        let tokens = engine.login(user.user_id).await.unwrap();
        (user.user_id, tokens.access_token)
    }

    fn create(access: Option<&str>, body: String) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/create")
            .header("content-type", "application/json");
        if let Some(token) = access {
            builder = builder.header(ACCESS, token);
        }
        builder.body(Body::from(body)).unwrap()
    }

    fn ad_body() -> Value {
        json!({
            "title": "Bicycle",
            "content": "Barely used, new tyres",
            "imageUrl": "https://img.example/bike.png",
            "price": 120.5
        })
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_ad() {
        let h = harness();
        let (user_id, access) = sign_up(&h.engine, "alice_1").await;

        let response = h
            .app
            .oneshot(create(Some(&access), ad_body().to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["title"], "Bicycle");
        assert_eq!(body["content"], "Barely used, new tyres");
        assert_eq!(body["imageUrl"], "https://img.example/bike.png");
        assert_eq!(body["price"], 120.5);
        assert!(body["createdAt"].is_string());

        let stored = h.ads.ads_by_user(&user_id).await;
        assert_eq!(stored.len(), 1);
        assert_eq!(body["id"], stored[0].ad_id.to_string());
    }

    #[tokio::test]
    async fn test_author_comes_from_token_not_body() {
        let h = harness();
        let (alice, access) = sign_up(&h.engine, "alice_1").await;
        let (bob, _) = sign_up(&h.engine, "bob_1").await;

        let mut body = ad_body();
        body["userId"] = json!(bob.to_string());
        let response = h
            .app
            .oneshot(create(Some(&access), body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(h.ads.ads_by_user(&alice).await.len(), 1);
        assert!(h.ads.ads_by_user(&bob).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_ad_requires_access_token() {
        let h = harness();
        let other = AuthEngine::new(
            InMemoryAuthRepository::new(),
            AuthConfig::new("test-password-salt", "another-token-salt"),
        );
        let (_, foreign) = sign_up(&other, "mallory").await;

        let cases = [
            (None, StatusCode::BAD_REQUEST),
            (Some("garbage"), StatusCode::BAD_REQUEST),
            (Some(foreign.as_str()), StatusCode::UNAUTHORIZED),
        ];
        for (token, expected) in cases {
            let response = h
                .app
                .clone()
                .oneshot(create(token, ad_body().to_string()))
                .await
                .unwrap();
            assert_eq!(response.status(), expected, "{token:?}");
        }
    }

    #[tokio::test]
    async fn test_expired_access_token_is_unauthorized() {
        let h = harness_with(
            AuthConfig::new("test-password-salt", "test-token-salt")
                .with_access_token_ttl(Duration::ZERO),
        );
        let (user_id, access) = sign_up(&h.engine, "alice_1").await;

        let response = h
            .app
            .oneshot(create(Some(&access), ad_body().to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(h.ads.ads_by_user(&user_id).await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_ads_are_bad_request() {
        let h = harness();
        let (user_id, access) = sign_up(&h.engine, "alice_1").await;

        let mut short_title = ad_body();
        short_title["title"] = json!("ab");
        let mut short_content = ad_body();
        short_content["content"] = json!("too short");
        let mut long_url = ad_body();
        long_url["imageUrl"] = json!("u".repeat(256));
        let mut negative = ad_body();
        negative["price"] = json!(-0.5);
        let mut missing_price = ad_body();
        missing_price.as_object_mut().unwrap().remove("price");
        let mut text_price = ad_body();
        text_price["price"] = json!("cheap");

        let bodies = [
            short_title.to_string(),
            short_content.to_string(),
            long_url.to_string(),
            negative.to_string(),
            missing_price.to_string(),
            text_price.to_string(),
            "{not json".to_string(),
        ];
        for body in bodies {
            let response = h
                .app
                .clone()
                .oneshot(create(Some(&access), body.clone()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(body_json(response).await["status"], 400);
        }

        assert!(h.ads.ads_by_user(&user_id).await.is_empty());
    }
}
