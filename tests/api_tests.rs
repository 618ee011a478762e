// tests/api_tests.rs

use std::sync::Arc;

use kindness_network::{config::Config, routes, state::AppState, store::SqliteStore};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    // Private in-memory database with the schema applied
    let store = SqliteStore::in_memory()
        .await
        .expect("Failed to open in-memory SQLite store");

    spawn_with(store, Config::in_memory()).await
}

/// Serves the router over `store` with the given configuration.
async fn spawn_with(store: SqliteStore, config: Config) -> String {
    // 1. Create test state
    let state = AppState {
        store: Arc::new(store),
        config,
    };

    // 2. Create the router with the app state
    let app = routes::create_router(state);

    // 3. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // 4. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn create(client: &reqwest::Client, url: &str, content: &str) -> reqwest::Response {
    client
        .post(url)
        .json(&json!({ "content": content }))
        .send()
        .await
        .expect("Failed to execute request")
}

async fn like(client: &reqwest::Client, url: &str, liked: bool) -> reqwest::Response {
    client
        .post(url)
        .json(&json!({ "liked": liked }))
        .send()
        .await
        .expect("Failed to execute request")
}

async fn get_json(client: &reqwest::Client, url: &str) -> Value {
    client
        .get(url)
        .send()
        .await
        .expect("Failed to execute request")
        .json::<Value>()
        .await
        .expect("Response was not JSON")
}

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn end_to_end_act_flow() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // 1. Share an act
    let response = create(&client, &format!("{}/api/acts", address), "Helped a neighbor").await;
    assert_eq!(response.status().as_u16(), 201);
    let act: Value = response.json().await.unwrap();
    assert_eq!(act["content"], "Helped a neighbor");
    assert_eq!(act["hearts"], 0);
    assert!(act["created_at"].is_string());
    let id = act["id"].as_i64().expect("id missing");

    // 2. Like it
    let response = like(&client, &format!("{}/api/acts/{}/like", address, id), true).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "hearts": 1 }));

    // 3. No comments yet
    let comments = get_json(&client, &format!("{}/api/acts/{}/comments", address, id)).await;
    assert_eq!(comments, json!([]));

    // 4. Comment
    let response = create(&client, &format!("{}/api/acts/{}/comments", address, id), "Nice!").await;
    assert_eq!(response.status().as_u16(), 201);
    let comment: Value = response.json().await.unwrap();
    assert_eq!(comment["act_id"], id);

    // 5. Exactly that comment is listed
    let comments = get_json(&client, &format!("{}/api/acts/{}/comments", address, id)).await;
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "Nice!");
}

#[tokio::test]
async fn create_act_trims_content() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = create(&client, &format!("{}/api/acts", address), "  Donated blood \n").await;
    assert_eq!(response.status().as_u16(), 201);
    let act: Value = response.json().await.unwrap();
    assert_eq!(act["content"], "Donated blood");
}

#[tokio::test]
async fn create_act_rejects_blank_content() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/acts", address);

    for content in ["", "   ", "\n\t"] {
        let response = create(&client, &url, content).await;
        assert_eq!(response.status().as_u16(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Content is required");
    }

    // Missing field behaves like empty content
    let response = client.post(&url).json(&json!({})).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 400);

    // Nothing was persisted
    let acts = get_json(&client, &url).await;
    assert_eq!(acts, json!([]));
}

#[tokio::test]
async fn create_act_enforces_max_length() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/acts", address);

    let response = create(&client, &url, &"a".repeat(1000)).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = create(&client, &url, &"a".repeat(1001)).await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Content must be 1000 characters or less");

    let acts = get_json(&client, &url).await;
    assert_eq!(acts.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/acts", address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());

    let response = client
        .post(&format!("{}/api/acts", address))
        .json(&json!({ "content": 42 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn acts_are_listed_newest_first() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/acts", address);

    for content in ["first", "second", "third"] {
        create(&client, &url, content).await;
    }

    let acts = get_json(&client, &url).await;
    let contents: Vec<&str> = acts
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn unlike_never_goes_below_zero() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let act: Value = create(&client, &format!("{}/api/acts", address), "Paid for coffee")
        .await
        .json()
        .await
        .unwrap();
    let like_url = format!("{}/api/acts/{}/like", address, act["id"]);

    let body: Value = like(&client, &like_url, false).await.json().await.unwrap();
    assert_eq!(body["hearts"], 0);

    like(&client, &like_url, true).await;
    let body: Value = like(&client, &like_url, true).await.json().await.unwrap();
    assert_eq!(body["hearts"], 2);

    let body: Value = like(&client, &like_url, false).await.json().await.unwrap();
    assert_eq!(body["hearts"], 1);

    // Missing flag counts as unlike
    let response = client.post(&like_url).json(&json!({})).send().await.unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["hearts"], 0);

    let acts = get_json(&client, &format!("{}/api/acts", address)).await;
    assert_eq!(acts[0]["hearts"], 0);
}

#[tokio::test]
async fn like_rejects_bad_and_unknown_ids() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = like(&client, &format!("{}/api/acts/abc/like", address), true).await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid act ID");

    let response = like(&client, &format!("{}/api/acts/9999/like", address), true).await;
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Act not found");
}

#[tokio::test]
async fn comments_require_existing_act() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = create(&client, &format!("{}/api/acts/9999/comments", address), "Hello").await;
    assert_eq!(response.status().as_u16(), 404);

    let comments = get_json(&client, &format!("{}/api/acts/9999/comments", address)).await;
    assert_eq!(comments, json!([]));

    let response = client
        .get(&format!("{}/api/acts/nope/comments", address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn comments_are_validated_and_listed_oldest_first() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let act: Value = create(&client, &format!("{}/api/acts", address), "Walked dogs")
        .await
        .json()
        .await
        .unwrap();
    let url = format!("{}/api/acts/{}/comments", address, act["id"]);

    let response = create(&client, &url, "   ").await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Comment content is required");

    let response = create(&client, &url, &"c".repeat(1001)).await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Comment must be 1000 characters or less");

    for content in ["one", "two", "three"] {
        let response = create(&client, &url, content).await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let comments = get_json(&client, &url).await;
    let contents: Vec<&str> = comments
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn ideas_flow() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/ideas", address);

    let response = create(&client, &url, &"i".repeat(501)).await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Content must be 500 characters or less");

    let response = create(&client, &url, "Leave quarters at a laundromat").await;
    assert_eq!(response.status().as_u16(), 201);
    let idea: Value = response.json().await.unwrap();
    assert_eq!(idea["hearts"], 0);

    create(&client, &url, "Smile at a stranger").await;
    let ideas = get_json(&client, &url).await;
    assert_eq!(ideas.as_array().unwrap().len(), 2);
    assert_eq!(ideas[0]["content"], "Smile at a stranger");
    assert_eq!(ideas[1]["content"], "Leave quarters at a laundromat");

    let like_url = format!("{}/api/ideas/{}/like", address, idea["id"]);
    let body: Value = like(&client, &like_url, true).await.json().await.unwrap();
    assert_eq!(body["hearts"], 1);

    let response = like(&client, &format!("{}/api/ideas/12345/like", address), true).await;
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Idea not found");

    let response = like(&client, &format!("{}/api/ideas/x1/like", address), true).await;
    assert_eq!(response.status().as_u16(), 400);

    // Acts and ideas are separate tables
    let acts = get_json(&client, &format!("{}/api/acts", address)).await;
    assert_eq!(acts, json!([]));
}

#[tokio::test]
async fn idea_suggestions_catalog() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let catalog = get_json(&client, &format!("{}/api/ideas/suggestions", address)).await;
    let categories = catalog.as_array().unwrap();
    assert_eq!(categories.len(), 8);
    assert_eq!(categories[0]["category"], "Simple Daily Acts");
    assert_eq!(categories[0]["suggestions"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn create_idea_rejects_blank_content() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/ideas", address);

    for content in ["", "  \t\n  "] {
        let response = create(&client, &url, content).await;
        assert_eq!(response.status().as_u16(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Content is required");
    }

    let ideas = get_json(&client, &url).await;
    assert_eq!(ideas, json!([]));
}

#[tokio::test]
async fn storage_failures_return_generic_500() {
    // A pool without the schema: every query fails with "no such table"
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open bare SQLite pool");
    let address = spawn_with(SqliteStore::new(pool), Config::in_memory()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/acts", address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Internal Server Error" }));

    let response = like(&client, &format!("{}/api/acts/1/like", address), true).await;
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let store = SqliteStore::in_memory().await.unwrap();
    let mut config = Config::in_memory();
    config.port = 8080;
    let address = spawn_with(store, config).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/acts", address))
        .header("Origin", "http://localhost:8080")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:8080"
    );

    let response = client
        .get(format!("{}/api/acts", address))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
