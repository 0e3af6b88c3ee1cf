use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_home_article_has_keywords() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");

    let title = page.find_element(".article_title").expect("Article title should render");
    assert!(!title.trim().is_empty());
    let keyword = page.find_element(".keyword").expect("Keywords should render");
    assert!(!keyword.trim().is_empty());
}

#[tokio::test]
async fn test_saving_a_keyword_persists_it() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");
    page.click(".keyword").expect("Failed to open popup");
    let word = page.find_element(".popup_word").expect("Popup should open");
    page.click(".popup button.primary").expect("Failed to save word");
    page.find_element(".popup button.saved").expect("Button should switch to saved");

    let stored = page
        .local_storage("linguaromana_saved_words")
        .expect("Failed to read localStorage")
        .expect("Saved words should be stored");
    assert!(stored.to_lowercase().contains(&word.trim().to_lowercase()));
}
