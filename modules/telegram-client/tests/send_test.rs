use std::io::Write;

use telegram_client::{TelegramClient, TelegramError};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("report.xlsx");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"workbook bytes").unwrap();
    path
}

#[tokio::test]
async fn send_document_posts_multipart_upload() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let document = write_fixture(&dir);

    Mock::given(method("POST"))
        .and(path("/botTEST:TOKEN/sendDocument"))
        .and(body_string_contains("chat_id"))
        .and(body_string_contains("-100123"))
        .and(body_string_contains("report.xlsx"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramClient::with_base_url(&server.uri(), "TEST:TOKEN".to_string());
    client
        .send_document("-100123", &document, "report.xlsx")
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_upload_surfaces_remote_detail() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let document = write_fixture(&dir);

    Mock::given(method("POST"))
        .and(path("/botTEST:TOKEN/sendDocument"))
        .respond_with(ResponseTemplate::new(403).set_body_string("bot was blocked"))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramClient::with_base_url(&server.uri(), "TEST:TOKEN".to_string());
    let result = client.send_document("-100123", &document, "report.xlsx").await;

    match result {
        Err(TelegramError::Api { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "bot was blocked");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_document_is_an_io_error() {
    let client = TelegramClient::with_base_url("http://127.0.0.1:9", "TEST:TOKEN".to_string());
    let result = client
        .send_document("-100123", std::path::Path::new("does-not-exist.xlsx"), "x")
        .await;

    assert!(matches!(result, Err(TelegramError::Io(_))));
}
