//! HTTP 选项来源集成测试
//!
//! 每个测试启动一个只应答一次的本地 HTTP 服务。

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use dynamic_form_core::{FormError, HttpOptionsFetcher, OptionsFetcher};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 每个测试运行时独立的客户端，避免连接池跨运行时复用
fn fetcher() -> HttpOptionsFetcher {
    HttpOptionsFetcher::with_client(reqwest::Client::new())
}

/// 启动一次性服务，返回请求地址
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/options")
}

#[tokio::test]
async fn test_fetch_decodes_string_array() {
    let url = serve_once("200 OK", r#"["A","B"]"#).await;
    let options = fetcher().fetch(&url).await.unwrap();
    assert_eq!(options, vec!["A".to_string(), "B".to_string()]);
}

#[tokio::test]
async fn test_fetch_rejects_error_status() {
    let url = serve_once("404 Not Found", r#"["A"]"#).await;
    let err = fetcher().fetch(&url).await.unwrap_err();
    assert_eq!(err, FormError::HttpStatus { url, status: 404 });
    assert!(err.is_expected());
}

#[tokio::test]
async fn test_fetch_rejects_non_json_body() {
    let url = serve_once("200 OK", "<html>nope</html>").await;
    let err = fetcher().fetch(&url).await.unwrap_err();
    assert!(matches!(err, FormError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_rejects_object_body() {
    let url = serve_once("200 OK", r#"{"options":["A"]}"#).await;
    let err = fetcher().fetch(&url).await.unwrap_err();
    assert!(matches!(err, FormError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_reports_connection_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetcher()
        .fetch(&format!("http://{addr}/options"))
        .await
        .unwrap_err();
    assert!(matches!(err, FormError::Network(_)), "got {err:?}");
}
