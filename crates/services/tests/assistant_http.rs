use std::time::Duration;

use services::{AssistantAction, AssistantConfig, AssistantError, AssistantService, CancellationToken};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve a single canned HTTP response and return the captured request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let base = format!("http://{}/v1", listener.local_addr().expect("addr"));
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.expect("read");
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&request) {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });
    (base, handle)
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    body.len() >= length
}

#[tokio::test]
async fn explain_returns_trimmed_reply() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":"  Shapes have sides.\n"}}]}"#,
    )
    .await;
    let config = AssistantConfig::new(&base, "test-key", "gpt-4").unwrap();
    let service = AssistantService::new(Some(config));

    let reply = service
        .run(AssistantAction::Explain, "Numbers and shapes.", &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(reply, "Shapes have sides.");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /v1/chat/completions"));
    assert!(request.to_ascii_lowercase().contains("authorization: bearer test-key"));
    assert!(request.contains(r#""model":"gpt-4""#));
    assert!(request.contains(r"Explain the following text:\n\nNumbers and shapes."));
}

#[tokio::test]
async fn error_status_is_reported() {
    let (base, _server) = serve_once("500 Internal Server Error", "{}").await;
    let config = AssistantConfig::new(&base, "test-key", "gpt-4").unwrap();
    let service = AssistantService::new(Some(config));

    let err = service
        .ask("hello", &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AssistantError::HttpStatus(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn empty_choices_are_an_error() {
    let (base, _server) = serve_once("200 OK", r#"{"choices":[]}"#).await;
    let config = AssistantConfig::new(&base, "test-key", "gpt-4").unwrap();
    let service = AssistantService::new(Some(config));

    let err = service
        .ask("hello", &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AssistantError::EmptyResponse));
}

#[tokio::test]
async fn cancelling_in_flight_request() {
    // Accepts the connection but never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/v1", listener.local_addr().unwrap());
    let _server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let config = AssistantConfig::new(&base, "test-key", "gpt-4").unwrap();
    let service = AssistantService::new(Some(config));
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let err = service.ask("hello", &cancel).await.unwrap_err();
    assert!(matches!(err, AssistantError::Cancelled));
}

#[tokio::test]
async fn slow_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/v1", listener.local_addr().unwrap());
    let _server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let config = AssistantConfig::new(&base, "test-key", "gpt-4")
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let service = AssistantService::new(Some(config));

    let err = service
        .ask("hello", &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AssistantError::TimedOut(_)));
}
