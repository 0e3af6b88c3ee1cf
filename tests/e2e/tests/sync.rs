use e2e::test_server::TestServer;
use serde_json::{json, Value};

#[tokio::test]
async fn test_sync_serves_builtin_content() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let payload: Value = reqwest::get(format!("{}/api/sync", server.url()))
        .await
        .expect("Failed to fetch sync")
        .json()
        .await
        .expect("Sync should return JSON");

    let articles = payload["articles"].as_array().expect("articles array");
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["id"], "2");
    assert!(payload["words"]["crisis"].is_object());
}

#[tokio::test]
async fn test_sync_serves_configured_file() {
    let server = TestServer::start_with_sync(json!({
        "articles": [{
            "id": 7,
            "title": "Notizie",
            "content": "La [crisi] continua",
            "language": "it",
            "date": "2025-09-03"
        }],
        "words": { "crisi": { "it": "crisi", "fr": "crise" } }
    }))
    .await
    .expect("Failed to start test server");

    let payload: Value = reqwest::get(format!("{}/api/sync", server.url()))
        .await
        .expect("Failed to fetch sync")
        .json()
        .await
        .expect("Sync should return JSON");

    assert_eq!(payload["articles"][0]["title"], "Notizie");
    assert_eq!(payload["words"]["crisi"]["fr"], "crise");
}
