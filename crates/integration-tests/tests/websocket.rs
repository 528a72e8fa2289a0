mod harness;

use futures_util::StreamExt;
use harness::config::ConfigBuilder;
use harness::server::TestServer;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;

/// Connect to `path` and return the first close frame the server sends
async fn first_close_frame(server: &TestServer, path: &str) -> Option<CloseFrame> {
    let (mut socket, _) = tokio_tungstenite::connect_async(server.ws_url(path)).await.unwrap();

    while let Some(message) = socket.next().await {
        match message {
            Ok(Message::Close(frame)) => return frame,
            Ok(_) => continue,
            Err(_) => return None,
        }
    }

    None
}

#[tokio::test]
async fn policy_violation_close_with_reason() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let frame = first_close_frame(&server, "/ws/close/1008?reason=banned")
        .await
        .expect("server should send a close frame");

    assert_eq!(u16::from(frame.code), 1008);
    assert_eq!(frame.reason.as_str(), "banned");
}

#[tokio::test]
async fn try_again_later_close_without_reason() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let frame = first_close_frame(&server, "/ws/close/1013")
        .await
        .expect("server should send a close frame");

    assert_eq!(u16::from(frame.code), 1013);
    assert!(frame.reason.as_str().is_empty());
}

#[tokio::test]
async fn application_close_code_is_sent_unchanged() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let frame = first_close_frame(&server, "/ws/close/4001?reason=custom")
        .await
        .expect("server should send a close frame");

    assert_eq!(u16::from(frame.code), 4001);
    assert_eq!(frame.reason.as_str(), "custom");
}

#[tokio::test]
async fn websocket_route_can_be_disabled() {
    let server = TestServer::start(ConfigBuilder::new().without_websocket().build())
        .await
        .unwrap();

    let result = tokio_tungstenite::connect_async(server.ws_url("/ws/close/1008")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn oversized_reason_is_truncated_to_fit_the_frame() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();
    let reason = "x".repeat(200);

    let frame = first_close_frame(&server, &format!("/ws/close/1008?reason={reason}"))
        .await
        .expect("server should send a close frame");

    assert_eq!(u16::from(frame.code), 1008);
    assert_eq!(frame.reason.as_str(), "x".repeat(123));
}
