use crate::app;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

const ACME: &str = "brandName=Acme&email=a%40x.com&productTier=1-5&category=Fashion";

#[actix_web::test]
async fn accepted_brand_is_welcomed() {
    let app = app::spawn_app().await;

    Mock::given(path("/exec"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.webhook_server)
        .await;

    let response = app
        .post_onboarding(format!("{}&shippingRegions=Europe", ACME))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Welcome to ATLAS! We'll review your application and be in touch within 24 hours."
        })
    );
}

#[actix_web::test]
async fn brand_names_with_punctuation_are_accepted_and_forwarded() {
    let app = app::spawn_app().await;

    Mock::given(path("/exec"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.webhook_server)
        .await;

    let response = app
        .post_onboarding(
            "brandName=Acme+%28Europe%29&email=a%40x.com&productTier=1-5&category=Fashion&shippingRegions=Europe"
                .into(),
        )
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let requests = app.webhook_server.received_requests().await.unwrap();
    let forwarded: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(forwarded["brandName"], "Acme (Europe)");
}

#[actix_web::test]
async fn accepted_brand_is_forwarded_to_the_webhook() {
    let app = app::spawn_app().await;

    Mock::given(path("/exec"))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.webhook_server)
        .await;

    app.post_onboarding(format!(
        "{}&shippingRegions=United+States&shippingRegions=Other+regions&socialX=https%3A%2F%2Fx.com%2Facme",
        ACME
    ))
    .await;

    let requests = app.webhook_server.received_requests().await.unwrap();
    let forwarded: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(forwarded["brandName"], "Acme");
    assert_eq!(forwarded["email"], "a@x.com");
    assert_eq!(forwarded["productTier"], "1-5");
    assert_eq!(forwarded["category"], "Fashion");
    assert_eq!(forwarded["hasShopifyStore"], false);
    assert_eq!(forwarded["shopifyDomain"], "");
    assert_eq!(forwarded["apiToken"], "");
    assert_eq!(forwarded["shippingRegions"], "United States, Other regions");
    assert_eq!(forwarded["socialX"], "https://x.com/acme");
    assert_eq!(forwarded["socialYoutube"], "");
    assert!(forwarded["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[actix_web::test]
async fn shopify_credentials_are_forwarded_when_the_store_is_connected() {
    let app = app::spawn_app().await;

    Mock::given(path("/exec"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.webhook_server)
        .await;

    app.post_onboarding(format!(
        "{}&shippingRegions=Europe&hasShopifyStore=on&shopifyDomain=acme.myshopify.com&apiToken=shpat_abc",
        ACME
    ))
    .await;

    let requests = app.webhook_server.received_requests().await.unwrap();
    let forwarded: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(forwarded["hasShopifyStore"], true);
    assert_eq!(forwarded["shopifyDomain"], "acme.myshopify.com");
    assert_eq!(forwarded["apiToken"], "shpat_abc");
}

#[actix_web::test]
async fn brand_shipping_only_to_other_regions_is_waitlisted() {
    let app = app::spawn_app().await;

    Mock::given(path("/exec"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.webhook_server)
        .await;

    let response = app
        .post_onboarding(format!("{}&shippingRegions=Other+regions", ACME))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "We're currently only onboarding brands that ship to U.S. and Europe. Join our waitlist for future expansion!"
        })
    );
}

#[actix_web::test]
async fn brand_without_any_region_is_waitlisted() {
    let app = app::spawn_app().await;

    Mock::given(path("/exec"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.webhook_server)
        .await;

    let response = app.post_onboarding(ACME.into()).await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn client_supplied_eligibility_flags_are_ignored() {
    let app = app::spawn_app().await;

    Mock::given(path("/exec"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.webhook_server)
        .await;

    let response = app
        .post_onboarding(format!(
            "{}&shippingRegions=Other+regions&eligibility=accepted&success=true",
            ACME
        ))
        .await;

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn webhook_failure_does_not_change_the_response() {
    let app = app::spawn_app().await;

    Mock::given(path("/exec"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.webhook_server)
        .await;

    let response = app
        .post_onboarding(format!("{}&shippingRegions=Europe", ACME))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn slow_webhook_does_not_change_the_response() {
    let app = app::spawn_app().await;

    // Longer than the test app's webhook timeout
    Mock::given(path("/exec"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .mount(&app.webhook_server)
        .await;

    let response = app
        .post_onboarding(format!("{}&shippingRegions=United+States", ACME))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn repeated_submissions_are_forwarded_independently() {
    let app = app::spawn_app().await;

    Mock::given(path("/exec"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.webhook_server)
        .await;

    let body = format!("{}&shippingRegions=Europe", ACME);
    app.post_onboarding(body.clone()).await;
    // Timestamps carry millisecond precision
    tokio::time::sleep(Duration::from_millis(5)).await;
    app.post_onboarding(body).await;

    let requests = app.webhook_server.received_requests().await.unwrap();
    let timestamps: Vec<String> = requests
        .iter()
        .map(|request| {
            let forwarded: Value = serde_json::from_slice(&request.body).unwrap();
            forwarded["timestamp"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(timestamps.len(), 2);
    assert_ne!(timestamps[0], timestamps[1]);
}

#[actix_web::test]
async fn onboarding_returns_a_400_when_data_is_missing() {
    let app = app::spawn_app().await;
    let test_cases = vec![
        (
            "email=a%40x.com&productTier=1-5&category=Fashion&shippingRegions=Europe",
            "missing the brand name",
        ),
        (
            "brandName=Acme&productTier=1-5&category=Fashion&shippingRegions=Europe",
            "missing the email",
        ),
        (
            "brandName=Acme&email=a%40x.com&shippingRegions=Europe&category=Fashion",
            "missing the product tier",
        ),
        ("", "missing everything"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_onboarding(invalid_body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with a 400 Bad Request when the payload was {}.",
            error_message
        );
    }
}

#[actix_web::test]
async fn onboarding_returns_a_400_when_fields_are_invalid() {
    let app = app::spawn_app().await;

    Mock::given(path("/exec"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.webhook_server)
        .await;

    let test_cases = vec![
        (
            format!("{}&shippingRegions=Asia", ACME),
            "an unknown shipping region",
        ),
        (
            format!("{}&shippingRegions=Other+regions+%28not+currently+supported%29", ACME),
            "the display label instead of the region token",
        ),
        (
            "brandName=Acme&email=definitely-not-an-email&productTier=1-5&category=Fashion&shippingRegions=Europe".to_string(),
            "an invalid email",
        ),
        (
            "brandName=Acme&email=a%40x.com&productTier=100&category=Fashion&shippingRegions=Europe".to_string(),
            "an unknown product tier",
        ),
        (
            "brandName=Acme&email=a%40x.com&productTier=1-5&category=Toys&shippingRegions=Europe".to_string(),
            "an unknown category",
        ),
        (
            format!("{}&shippingRegions=Europe&hasShopifyStore=on", ACME),
            "a connected store without credentials",
        ),
    ];

    for (body, description) in test_cases {
        let response = app.post_onboarding(body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with a 400 Bad Request when the payload had {}.",
            description
        );
    }
}
