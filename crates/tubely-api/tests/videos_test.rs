mod helpers;

use helpers::auth::bearer;
use helpers::{api_path, setup_test_app};
use uuid::Uuid;

#[tokio::test]
async fn test_create_video() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();

    let response = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", bearer(&app.token_for(user)))
        .json(&serde_json::json!({ "title": "  Boots  ", "description": "How to wear boots" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let data: serde_json::Value = response.json();
    assert_eq!(data["title"], "Boots");
    assert_eq!(data["description"], "How to wear boots");
    assert_eq!(data["user_id"], user.to_string());
    assert!(data["thumbnail_url"].is_null());

    let id: Uuid = data["id"].as_str().unwrap().parse().unwrap();
    assert!(app.store.peek(id).await.is_some());
}

#[tokio::test]
async fn test_create_video_requires_auth() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&api_path("/videos"))
        .json(&serde_json::json!({ "title": "Boots" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert!(app.store.inner().is_empty().await);
}

#[tokio::test]
async fn test_create_video_empty_title() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", bearer(&app.token_for(Uuid::new_v4())))
        .json(&serde_json::json!({ "title": "   " }))
        .await;

    assert_eq!(response.status_code(), 400);
    let data: serde_json::Value = response.json();
    assert_eq!(data["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_create_video_invalid_body() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", bearer(&app.token_for(Uuid::new_v4())))
        .json(&serde_json::json!({ "description": "no title" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let data: serde_json::Value = response.json();
    assert_eq!(data["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_get_video() {
    let app = setup_test_app().await;
    let video = app.seed_video(Uuid::new_v4()).await;

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}", video.id)))
        .await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data["id"], video.id.to_string());
    assert_eq!(data["title"], "Boots");
}

#[tokio::test]
async fn test_get_video_not_found() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}", Uuid::new_v4())))
        .await;

    assert_eq!(response.status_code(), 404);
    let data: serde_json::Value = response.json();
    assert_eq!(data["error"], "Couldn't get video");
}

#[tokio::test]
async fn test_get_video_invalid_id() {
    let app = setup_test_app().await;

    let response = app.client().get(&api_path("/videos/not-a-uuid")).await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_health_and_request_id() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/health")
        .add_header("X-Request-ID", "req-123")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("X-Request-ID"), "req-123");
    let data: serde_json::Value = response.json();
    assert_eq!(data["status"], "healthy");
    assert_eq!(data["thumbnail_storage"], "data_uri");
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let request_id = response.header("X-Request-ID");
    assert!(Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert!(data["paths"]["/api/videos/{video_id}/thumbnail"].is_object());
}
