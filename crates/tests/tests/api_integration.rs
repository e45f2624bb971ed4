use std::path::PathBuf;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use gluten_api::{build_app, AppConfig};
use gluten_core::{BARCODE_NOT_FOUND, CHAT_FALLBACK, SYMPTOM_DEFAULT_ADVICE};
use serde_json::{json, Value};
use tower::ServiceExt;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn fixture_config() -> AppConfig {
    AppConfig {
        product_csv: fixtures().join("product.csv"),
        chat_csv: fixtures().join("chat_data.csv"),
        templates_root: fixtures().join("templates"),
        ..AppConfig::default()
    }
}

async fn app() -> Router {
    build_app(&fixture_config()).await.expect("app should build")
}

async fn post_json(app: Router, uri: &str, body: Value) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_reports_loaded_tables() {
    let app = app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["data"]["products_loaded"], 3);
    assert_eq!(parsed["data"]["chat_rules_loaded"], 3);
}

#[tokio::test]
async fn barcode_lookup_reports_status_and_name() {
    let app = app().await;

    let gluten_free = post_json(
        app.clone(),
        "/check_barcode",
        json!({ "barcode": "8901058000290" }),
    )
    .await;
    assert_eq!(gluten_free["result"], "✅ Gluten-Free - Rice Poha");

    // Stored barcodes were trimmed at load time.
    let contains = post_json(
        app.clone(),
        "/check_barcode",
        json!({ "barcode": "8901725181222" }),
    )
    .await;
    assert_eq!(contains["result"], "❌ Contains Gluten - Whole Wheat Atta");

    let missing = post_json(app, "/check_barcode", json!({ "barcode": "0000" })).await;
    assert_eq!(missing["result"], BARCODE_NOT_FOUND);
}

// The fixture lists one barcode twice; the later row currently wins.
#[tokio::test]
async fn duplicate_barcode_uses_last_row() {
    let body = post_json(
        app().await,
        "/check_barcode",
        json!({ "barcode": "8906010500016" }),
    )
    .await;
    assert_eq!(
        body["result"],
        "❌ Contains Gluten - Millet Cookies (wheat blend)"
    );
}

#[tokio::test]
async fn chat_uses_first_rule_in_table_order() {
    let app = app().await;

    // Mentions "diet" before "gluten", but the gluten rule is listed first.
    let body = post_json(
        app.clone(),
        "/chat/message",
        json!({ "message": "Which DIET has no gluten?" }),
    )
    .await;
    assert_eq!(
        body["reply"],
        "Gluten is a protein found in wheat, barley and rye."
    );

    let fallback = post_json(app, "/chat/message", json!({ "message": "hello there" })).await;
    assert_eq!(fallback["reply"], CHAT_FALLBACK);
}

#[tokio::test]
async fn symptom_analysis_concatenates_every_match() {
    let app = app().await;

    let body = post_json(
        app.clone(),
        "/analyze_symptoms",
        json!({
            "illness": "none",
            "symptoms": "Bloating and fatigue for weeks",
            "duration": "3 weeks",
            "diet": "regular",
            "period": "daily"
        }),
    )
    .await;
    let reply = body["reply"].as_str().unwrap();
    let lines = reply.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("digestive discomfort"));
    assert!(lines[1].contains("Fatigue is common"));

    let default = post_json(app, "/analyze_symptoms", json!({ "symptoms": "" })).await;
    assert_eq!(default["reply"], SYMPTOM_DEFAULT_ADVICE);
}

#[tokio::test]
async fn generate_diet_accepts_form_and_returns_week() {
    let app = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/generate-diet")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=Meera&diet_type=Vegetarian"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["name"], "Meera");
    assert_eq!(parsed["diet_type"], "Vegetarian");

    let week = parsed["weekly_plan"].as_array().unwrap();
    assert_eq!(week.len(), 7);
    assert_eq!(week[0]["day"], "Mon");
    assert_eq!(week[0]["breakfast"], "Poha");
    assert_eq!(week[6]["day"], "Sun");
    assert_eq!(week[6]["dinner"], "Mushroom Curry");
    assert!(week
        .iter()
        .all(|row| row["snack"] == "Roasted Nuts / Juice"));
}

#[tokio::test]
async fn unknown_diet_type_gets_plant_based_week() {
    let app = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/generate-diet")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=Sam&diet_type=garbage-value"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["diet_type"], "Other");
    assert_eq!(parsed["weekly_plan"][0]["breakfast"], "Tofu Scramble");
}

#[tokio::test]
async fn repeated_queries_answer_identically() {
    let app = app().await;
    let message = json!({ "message": "any symptom list?" });

    let first = post_json(app.clone(), "/chat/message", message.clone()).await;
    let second = post_json(app.clone(), "/chat/message", message).await;
    assert_eq!(first, second);

    for barcode in ["8901058000290", "0000"] {
        let request = json!({ "barcode": barcode });
        let first = post_json(app.clone(), "/check_barcode", request.clone()).await;
        let second = post_json(app.clone(), "/check_barcode", request).await;
        assert_eq!(first, second);
    }

    for symptoms in ["bloating and itching", "headache"] {
        let report = json!({ "symptoms": symptoms });
        let first = post_json(app.clone(), "/analyze_symptoms", report.clone()).await;
        let second = post_json(app.clone(), "/analyze_symptoms", report).await;
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn numeric_barcode_gets_not_found_answer() {
    let body = post_json(
        app().await,
        "/check_barcode",
        json!({ "barcode": 8901058000290_u64 }),
    )
    .await;
    assert_eq!(body["result"], BARCODE_NOT_FOUND);
}

#[tokio::test]
async fn missing_data_sources_degrade_to_fallbacks() {
    let config = AppConfig {
        product_csv: fixtures().join("absent_product.csv"),
        chat_csv: fixtures().join("absent_chat.csv"),
        templates_root: fixtures().join("templates"),
        ..AppConfig::default()
    };
    let app = build_app(&config).await.expect("app should still build");

    let barcode = post_json(
        app.clone(),
        "/check_barcode",
        json!({ "barcode": "8901058000290" }),
    )
    .await;
    assert_eq!(barcode["result"], BARCODE_NOT_FOUND);

    let chat = post_json(app, "/chat/message", json!({ "message": "gluten" })).await;
    assert_eq!(chat["reply"], CHAT_FALLBACK);
}

#[tokio::test]
async fn static_pages_are_served_from_templates_root() {
    let app = app().await;

    let home = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(home.status(), StatusCode::OK);
    let body = to_bytes(home.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("gluten intolerance"));

    let recipe = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/recipe/pancakes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(recipe.status(), StatusCode::OK);

    let absent = app
        .oneshot(Request::builder().uri("/contact").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(absent.status(), StatusCode::NOT_FOUND);
}
