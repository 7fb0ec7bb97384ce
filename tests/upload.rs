use std::collections::HashMap;
use std::path::PathBuf;

use leonardo::{ClientBuilder, LeonardoError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("leonardo-upload-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join(name);
    std::fs::write(&file, contents).unwrap();
    file
}

fn presigned_fields() -> HashMap<String, String> {
    HashMap::from([
        ("key".to_string(), "uploads/init.png".to_string()),
        ("policy".to_string(), "eyJleHAiOjF9".to_string()),
    ])
}

#[tokio::test]
async fn client_upload_posts_fields_then_file_without_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bucket"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ClientBuilder::new()
        .api_key("test-key")
        .base_url(server.uri())
        .build()
        .unwrap();
    let file = scratch_file("init.png", b"PNGDATA");

    client
        .upload_to_presigned_url(&format!("{}/bucket", server.uri()), &presigned_fields(), &file)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let req = &requests[0];
    assert!(req.headers.get("authorization").is_none());
    let content_type = req.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&req.body);
    let key_at = body.find("name=\"key\"").unwrap();
    let policy_at = body.find("name=\"policy\"").unwrap();
    let file_at = body.find("name=\"file\"").unwrap();
    assert!(key_at < file_at && policy_at < file_at);
    assert!(body.contains("filename=\"init.png\""));
    assert!(body.contains("uploads/init.png"));
    assert!(body.contains("PNGDATA"));
}

#[tokio::test]
async fn rejected_upload_reports_storage_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bucket"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<Error>AccessDenied</Error>"))
        .mount(&server)
        .await;

    let file = scratch_file("denied.png", b"x");
    let err = leonardo::upload_to_presigned_url(
        &format!("{}/bucket", server.uri()),
        &presigned_fields(),
        &file,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LeonardoError::Upload { status: 403 }));
}

#[tokio::test]
async fn standalone_upload_accepts_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bucket"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let file = scratch_file("ok.bin", b"payload");
    leonardo::upload_to_presigned_url(&format!("{}/bucket", server.uri()), &HashMap::new(), &file)
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_local_file_never_reaches_the_network() {
    let server = MockServer::start().await;
    let err = leonardo::upload_to_presigned_url(
        &format!("{}/bucket", server.uri()),
        &HashMap::new(),
        "/no/such/file.png",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LeonardoError::Io(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
