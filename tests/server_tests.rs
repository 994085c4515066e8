//! End-to-end server tests over a real TCP socket

use std::sync::Arc;

use beauty_palette::generator::ServerInfo;
use beauty_palette::server::{serve_with_shutdown, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("should connect");
    stream.write_all(request.as_bytes()).await.expect("should write request");

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.expect("should read response");
    String::from_utf8_lossy(&response).into_owned()
}

#[tokio::test]
async fn test_serve_until_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("should bind");
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::new(ServerInfo::default()));
    let (stop, stopped) = oneshot::channel::<()>();

    let server = tokio::spawn(serve_with_shutdown(listener, state, async {
        let _ = stopped.await;
    }));

    let health =
        raw_request(addr, "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await;
    assert!(health.starts_with("HTTP/1.1 200 OK"), "unexpected response: {}", health);
    assert!(health.contains("\"status\":\"healthy\""));

    let body = r##"{"colors":["#FF0000","#00FFFF"]}"##;
    let analyze = raw_request(
        addr,
        &format!(
            "POST /api/analyze-harmony HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
    )
    .await;
    assert!(analyze.starts_with("HTTP/1.1 200 OK"));
    assert!(analyze.contains("\"harmonyType\":\"Complementary\""));

    stop.send(()).expect("server should still be running");
    let result = server.await.expect("server task should not panic");
    assert!(result.is_ok());
}
