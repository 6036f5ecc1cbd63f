use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use repair_academy_api::config::{CorsConfig, Settings};
use repair_academy_api::models::{Service, ServiceIcon};
use repair_academy_api::routes::create_router;
use repair_academy_api::state::AppState;
use repair_academy_api::store::MemoryStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn build_app() -> Router {
    let settings = Settings::default();
    let state = Arc::new(AppState::in_memory(settings.institute_name.clone()));
    create_router(state, &settings)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn enrollment_body() -> Value {
    json!({
        "full_name": "A",
        "email": "a@x.com",
        "phone": "123",
        "course": "Basic Repair"
    })
}

fn achievement_body(name: &str) -> Value {
    json!({
        "student_name": name,
        "course_completed": "Chip Level / Motherboard Repair",
        "completion_date": "2024-05-20",
        "testimonial": "Now running my own shop",
        "placed_at": "Self-employed"
    })
}

#[tokio::test]
async fn test_root_banner_and_health() {
    let app = build_app();

    let (status, body) = send(&app, "GET", "/api/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Sri Sakthi Vinayaga Mobile Services API");

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_services_default_when_store_empty() {
    let app = build_app();

    let (status, body) = send(&app, "GET", "/api/services", None).await;
    assert_eq!(status, StatusCode::OK);

    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 6);
    assert_eq!(services[0]["name"], "Basic Mobile Repair");
    assert_eq!(services[0]["icon"], "smartphone");
    assert_eq!(services[2]["featured"], true);
}

#[tokio::test]
async fn test_stored_services_with_unknown_icon() {
    let store = MemoryStore::with_services(vec![Service {
        id: 1,
        name: "Laptop Repair".to_string(),
        description: "Keyboards and hinges".to_string(),
        icon: ServiceIcon::from_key("laptop"),
        featured: true,
    }]);
    let settings = Settings::default();
    let state = Arc::new(AppState::new(Arc::new(store), "Test Academy"));
    let app = create_router(state, &settings);

    let (status, body) = send(&app, "GET", "/api/services", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["icon"], "wrench");
}

#[tokio::test]
async fn test_courses() {
    let app = build_app();

    let (status, body) = send(&app, "GET", "/api/courses", None).await;
    assert_eq!(status, StatusCode::OK);

    let courses = body.as_array().unwrap();
    assert_eq!(courses.len(), 4);
    assert_eq!(courses[0]["duration"], "2 Months");
    assert!(courses.iter().all(|c| c["id"].is_i64()));
}

#[tokio::test]
async fn test_create_enrollment_is_pending() {
    let app = build_app();

    let (status, body) = send(&app, "POST", "/api/enrollments", Some(enrollment_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert!(body["id"].is_i64());
    assert_eq!(body["full_name"], "A");
    assert_eq!(body["address"], Value::Null);
}

#[tokio::test]
async fn test_create_enrollment_ignores_client_id_and_status() {
    let app = build_app();

    let mut body = enrollment_body();
    body["id"] = json!(500);
    body["status"] = json!("approved");

    let (status, created) = send(&app, "POST", "/api/enrollments", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
    assert_ne!(created["id"], json!(500));
}

#[tokio::test]
async fn test_create_enrollment_without_course_fails() {
    let app = build_app();

    let mut body = enrollment_body();
    body.as_object_mut().unwrap().remove("course");

    let (status, error) = send(&app, "POST", "/api/enrollments", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["success"], false);
    assert!(error["message"].as_str().unwrap().contains("course"));

    let (_, list) = send(&app, "GET", "/api/enrollments", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_enrollment_with_blank_required_field_fails() {
    let app = build_app();

    let mut body = enrollment_body();
    body["phone"] = json!("   ");

    let (status, error) = send(&app, "POST", "/api/enrollments", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_enrollment_with_null_course_is_validation_error() {
    let app = build_app();

    let mut body = enrollment_body();
    body["course"] = Value::Null;

    let (status, error) = send(&app, "POST", "/api/enrollments", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("course"));
}

#[tokio::test]
async fn test_create_enrollment_accepts_long_free_text() {
    let app = build_app();

    let mut body = enrollment_body();
    body["full_name"] = json!("Venkatasubramanian ".repeat(10).trim());
    body["phone"] = json!("+91 98765 43210 ext. 204 (evenings only, after 6pm)");

    let (status, created) = send(&app, "POST", "/api/enrollments", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = build_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/enrollments")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_enrollment_status() {
    let app = build_app();

    let (_, created) = send(&app, "POST", "/api/enrollments", Some(enrollment_body())).await;
    let id = created["id"].as_i64().unwrap();

    let uri = format!("/api/enrollments/{}/status?status=approved", id);
    let (status, updated) = send(&app, "PATCH", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "approved");
    assert_eq!(updated["id"], created["id"]);

    let (_, list) = send(&app, "GET", "/api/enrollments", None).await;
    assert_eq!(list[0]["status"], "approved");

    // any status -> any status
    let uri = format!("/api/enrollments/{}/status?status=pending", id);
    let (status, updated) = send(&app, "PATCH", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "pending");
}

#[tokio::test]
async fn test_update_enrollment_status_invalid_value() {
    let app = build_app();

    let (_, created) = send(&app, "POST", "/api/enrollments", Some(enrollment_body())).await;
    let id = created["id"].as_i64().unwrap();

    let uri = format!("/api/enrollments/{}/status?status=archived", id);
    let (status, error) = send(&app, "PATCH", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");

    let uri = format!("/api/enrollments/{}/status", id);
    let (status, _) = send(&app, "PATCH", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, "GET", "/api/enrollments", None).await;
    assert_eq!(list[0]["status"], "pending");
}

#[tokio::test]
async fn test_update_unknown_enrollment_is_not_found() {
    let app = build_app();

    let (status, error) = send(&app, "PATCH", "/api/enrollments/42/status?status=approved", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");

    // validation runs before the lookup
    let (status, error) = send(&app, "PATCH", "/api/enrollments/42/status?status=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_achievement_and_list_newest_first() {
    let app = build_app();

    let (status, first) = send(&app, "POST", "/api/achievements", Some(achievement_body("Arun"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(first["id"].is_i64());
    assert_eq!(first["photo_url"], Value::Null);
    assert!(first["created_at"].is_string());

    let (status, _) = send(&app, "POST", "/api/achievements", Some(achievement_body("Bala"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = send(&app, "GET", "/api/achievements", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["student_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bala", "Arun"]);
}

#[tokio::test]
async fn test_create_achievement_without_completion_date_fails() {
    let app = build_app();

    let mut body = achievement_body("Arun");
    body.as_object_mut().unwrap().remove("completion_date");

    let (status, error) = send(&app, "POST", "/api/achievements", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("completion_date"));
}

#[tokio::test]
async fn test_create_achievement_with_site_path_photo() {
    let app = build_app();

    let mut body = achievement_body("Arun");
    body["photo_url"] = json!("/uploads/a.jpg");

    let (status, created) = send(&app, "POST", "/api/achievements", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["photo_url"], "/uploads/a.jpg");
}

#[tokio::test]
async fn test_create_achievement_with_null_student_name_is_validation_error() {
    let app = build_app();

    let mut body = achievement_body("Arun");
    body["student_name"] = Value::Null;

    let (status, error) = send(&app, "POST", "/api/achievements", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("student_name"));
}

#[tokio::test]
async fn test_delete_achievement() {
    let app = build_app();

    let (_, created) = send(&app, "POST", "/api/achievements", Some(achievement_body("Arun"))).await;
    let uri = format!("/api/achievements/{}", created["id"]);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Achievement deleted successfully");

    let (_, list) = send(&app, "GET", "/api/achievements", None).await;
    assert!(list.as_array().unwrap().is_empty());

    let (status, error) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_with_non_numeric_id_is_bad_request() {
    let app = build_app();

    let (status, error) = send(&app, "DELETE", "/api/achievements/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "BAD_REQUEST");
}

fn build_app_with_origins(origins: &[&str]) -> Router {
    let settings = Settings {
        cors: CorsConfig {
            allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
        },
        ..Settings::default()
    };
    let state = Arc::new(AppState::in_memory(settings.institute_name.clone()));
    create_router(state, &settings)
}

fn preflight(uri: &str, origin: &str, method: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri(uri)
        .header("origin", origin)
        .header("access-control-request-method", method)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_preflight_allows_patch_and_delete() {
    let app = build_app_with_origins(&["https://academy.example"]);

    for (uri, method) in [
        ("/api/enrollments/1/status", "PATCH"),
        ("/api/achievements/1", "DELETE"),
    ] {
        let resp = app
            .clone()
            .oneshot(preflight(uri, "https://academy.example", method))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let headers = resp.headers();
        assert_eq!(
            headers.get("access-control-allow-origin").unwrap(),
            "https://academy.example"
        );
        let allowed = headers
            .get("access-control-allow-methods")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(allowed.contains(method), "{} missing from {}", method, allowed);
    }
}

#[tokio::test]
async fn test_cors_unlisted_origin_is_not_echoed() {
    let app = build_app_with_origins(&["https://academy.example"]);

    let resp = app
        .clone()
        .oneshot(preflight("/api/enrollments", "https://evil.example", "POST"))
        .await
        .unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_cors_any_origin_by_default() {
    let app = build_app();

    let req = Request::builder()
        .method("GET")
        .uri("/api/courses")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
}

#[tokio::test]
async fn test_cors_unusable_origin_list_does_not_allow_any() {
    let app = build_app_with_origins(&["bad\norigin"]);

    let req = Request::builder()
        .method("GET")
        .uri("/api/courses")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}
