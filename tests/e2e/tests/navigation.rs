use e2e::test_server::TestServer;

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("LinguaRomana") || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(format!("{}/api/health", server.url()))
        .await
        .expect("Failed to fetch health");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("OK"));
}

#[tokio::test]
async fn test_routes_render() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    for path in ["/saved", "/archive", "/archive/2", "/admin"] {
        let response = reqwest::get(format!("{}{}", server.url(), path))
            .await
            .expect("Failed to fetch route");
        assert_eq!(response.status(), 200, "{path} should return 200 OK");
    }
}
