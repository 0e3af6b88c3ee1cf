use api::backend::BackendClient;
use api::error::Error;
use api::types::QuizSubmission;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one canned HTTP response and hand back the raw request.
async fn one_shot_server(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.expect("read");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body.len() >= length
}

#[tokio::test]
async fn profile_is_decoded() {
    let (base, server) = one_shot_server(
        "200 OK",
        r#"{"user": {"id": 1, "username": "ana", "email": "ana@example.com"},
            "profile": {"preferred_language": "it", "current_streak": 7, "total_points": 2840,
                        "level": 3, "last_activity_date": "2025-09-01"}}"#,
    )
    .await;

    let profile = BackendClient::new(base).fetch_profile().await.unwrap();
    assert_eq!(profile.user.username, "ana");
    assert_eq!(profile.profile.current_streak, 7);
    assert_eq!(profile.profile.total_points, 2840);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/profile/ HTTP/1.1"));
}

#[tokio::test]
async fn forbidden_profile_means_guest() {
    let (base, server) = one_shot_server("403 Forbidden", r#"{"detail": "no"}"#).await;
    let err = BackendClient::new(base).fetch_profile().await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized));
    server.await.unwrap();
}

#[tokio::test]
async fn submit_sends_csrf_header_and_json() {
    let (base, server) = one_shot_server(
        "200 OK",
        r#"{"success": true, "total_points": 130, "quiz_completed": true,
            "streak_info": {"current_streak": 2, "streak_updated": true}}"#,
    )
    .await;

    let client = BackendClient::new(base).with_csrf_token(Some("tok123".into()));
    let submission = QuizSubmission {
        article_id: "2".into(),
        score: 100.0,
        points_earned: 30,
        time_spent: Some(45),
    };
    let resp = client.submit_quiz(&submission).await.unwrap();
    assert_eq!(resp.total_points, 130);
    assert_eq!(resp.streak_info.unwrap().current_streak, 2);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/submit-quiz/ HTTP/1.1"));
    assert!(request.to_lowercase().contains("x-csrftoken: tok123"));
    assert!(request.contains(r#""article_id":"2""#));
    assert!(request.contains(r#""points_earned":30"#));
}

#[tokio::test]
async fn backend_error_message_is_surfaced() {
    let (base, server) = one_shot_server("400 Bad Request", r#"{"error": "Invalid JSON"}"#).await;
    let submission = QuizSubmission {
        article_id: "2".into(),
        score: 0.0,
        points_earned: 0,
        time_spent: None,
    };
    let err = BackendClient::new(base).submit_quiz(&submission).await.unwrap_err();
    match err {
        Error::Backend { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid JSON");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    server.await.unwrap();
}
