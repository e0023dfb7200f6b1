use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn score_app() -> Router {
    let cfg = taaltoren::config::Config {
        database_url: Some("sqlite::memory:".to_string()),
        db_max_connections: 1,
        ..Default::default()
    };
    taaltoren::server::build_score_app(&cfg)
        .await
        .expect("failed to build score app")
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn register(app: &Router, username: &str, password: &str) {
    let (status, body) = call(
        app,
        "POST",
        "/register",
        Some(json!({"username": username, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Користувач зареєстрований!"}));
}

async fn add_points(app: &Router, username: &str, points: i64) {
    let (status, body) = call(
        app,
        "POST",
        "/add_points",
        Some(json!({"username": username, "points": points})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Очки оновлено!"}));
}

async fn leaderboard(app: &Router) -> Vec<Value> {
    let (status, body) = call(app, "GET", "/leaderboard", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().cloned().expect("leaderboard is a json array")
}

#[tokio::test]
async fn register_then_login_succeeds() {
    let app = score_app().await;
    register(&app, "alice", "pw1").await;

    let (status, body) = call(
        &app,
        "POST",
        "/login",
        Some(json!({"username": "alice", "password": "pw1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Успішний вхід!"}));
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let app = score_app().await;
    register(&app, "alice", "pw1").await;

    let (status, body) = call(
        &app,
        "POST",
        "/login",
        Some(json!({"username": "alice", "password": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Невірний логін або пароль!"}));
}

#[tokio::test]
async fn login_with_unknown_username_is_401() {
    let app = score_app().await;

    let (status, _) = call(
        &app,
        "POST",
        "/login",
        Some(json!({"username": "ghost", "password": "pw1"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn points_accumulate_across_calls() {
    let app = score_app().await;
    register(&app, "bob", "pw").await;

    add_points(&app, "bob", 5).await;
    assert_eq!(leaderboard(&app).await, vec![json!({"username": "bob", "points": 5})]);

    add_points(&app, "bob", 5).await;
    assert_eq!(leaderboard(&app).await, vec![json!({"username": "bob", "points": 10})]);
}

#[tokio::test]
async fn add_points_for_unknown_user_is_a_silent_no_op() {
    let app = score_app().await;
    register(&app, "carol", "pw").await;
    let before = leaderboard(&app).await;

    add_points(&app, "nobody", 50).await;

    assert_eq!(leaderboard(&app).await, before);
}

#[tokio::test]
async fn add_points_without_amount_adds_zero() {
    let app = score_app().await;
    register(&app, "dave", "pw").await;
    add_points(&app, "dave", 3).await;

    let (status, _) = call(&app, "POST", "/add_points", Some(json!({"username": "dave"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(leaderboard(&app).await, vec![json!({"username": "dave", "points": 3})]);
}

#[tokio::test]
async fn leaderboard_is_empty_on_a_fresh_table() {
    let app = score_app().await;
    assert!(leaderboard(&app).await.is_empty());
}

#[tokio::test]
async fn leaderboard_returns_top_ten_descending() {
    let app = score_app().await;
    for i in 0..13 {
        let name = format!("user{i}");
        register(&app, &name, "pw").await;
        add_points(&app, &name, i * 2).await;
    }

    let board = leaderboard(&app).await;
    assert_eq!(board.len(), 10);
    let points: Vec<i64> = board
        .iter()
        .map(|e| e["points"].as_i64().expect("points is an integer"))
        .collect();
    assert_eq!(points, vec![24, 22, 20, 18, 16, 14, 12, 10, 8, 6]);
    assert_eq!(board[0], json!({"username": "user12", "points": 24}));
}

#[tokio::test]
async fn alice_example_shows_up_on_the_leaderboard() {
    let app = score_app().await;
    register(&app, "alice", "pw1").await;
    add_points(&app, "alice", 7).await;

    assert!(
        leaderboard(&app)
            .await
            .contains(&json!({"username": "alice", "points": 7}))
    );
}

#[tokio::test]
async fn duplicate_registration_is_accepted() {
    let app = score_app().await;
    register(&app, "erin", "a").await;
    register(&app, "erin", "b").await;

    assert_eq!(leaderboard(&app).await.len(), 2);
}

#[tokio::test]
async fn malformed_json_surfaces_as_generic_500() {
    let app = score_app().await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/register")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body).expect("response body was not utf-8");
    assert!(body_str.contains(r#""code":"INTERNAL_ERROR""#));
}

#[tokio::test]
async fn register_without_username_is_a_500() {
    let app = score_app().await;

    let (status, body) = call(&app, "POST", "/register", Some(json!({"password": "pw"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert!(leaderboard(&app).await.is_empty());
}

#[tokio::test]
async fn missing_content_type_is_a_500() {
    let app = score_app().await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .body(Body::from(r#"{"username":"a","password":"b"}"#))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn overflowing_add_points_fails_alone_and_leaderboard_keeps_working() {
    let app = score_app().await;
    register(&app, "max", "pw").await;
    add_points(&app, "max", i64::MAX).await;

    let (status, body) = call(
        &app,
        "POST",
        "/add_points",
        Some(json!({"username": "max", "points": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

    assert_eq!(
        leaderboard(&app).await,
        vec![json!({"username": "max", "points": i64::MAX})]
    );
}
