use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_admin_page_asks_for_password() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/admin", server.url()))
        .expect("Failed to navigate");

    let result = page.find_element("input[name='admin_password']");
    assert!(result.is_ok(), "Password input should exist");
}

#[tokio::test]
async fn test_admin_login_with_default_password() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/admin", server.url()))
        .expect("Failed to navigate");
    page.type_text("input[name='admin_password']", "admin123")
        .expect("Failed to type password");
    page.click(".admin_login button.primary").expect("Failed to click login");

    let header = page.find_element(".admin_section h2").expect("Admin panel should open");
    assert!(header.contains("Articles"));
}
