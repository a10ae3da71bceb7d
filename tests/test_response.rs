use harbor::http::encoding::Encoding;
use harbor::http::response::{Response, ResponseBuilder, StatusCode};
use harbor::http::writer::{ResponseWriter, serialize_head, serialize_response};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
}

#[test]
fn test_response_builder_without_body_has_no_length() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(response.headers.is_empty());
    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length"), None);
}

#[test]
fn test_response_builder_empty_body_has_zero_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(Vec::new())
        .build();

    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[test]
fn test_response_builder_content_length_comes_last() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .encoding(Some(Encoding::Br))
        .body(b"abc".to_vec())
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, ["Content-Type", "Content-Encoding", "Content-Length"]);
    assert_eq!(response.header("content-encoding"), Some("br"));
    assert_eq!(response.header("content-length"), Some("3"));
}

#[test]
fn test_response_builder_no_encoding() {
    let response = ResponseBuilder::new(StatusCode::Ok).encoding(None).build();
    assert_eq!(response.header("Content-Encoding"), None);
}

fn text(body: &str) -> Response {
    ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(body.as_bytes().to_vec())
        .build()
}

#[test]
fn test_serialize_not_found() {
    assert_eq!(
        serialize_response(&Response::not_found()),
        b"HTTP/1.1 404 Not Found\r\n\r\n".to_vec()
    );
}

#[test]
fn test_serialize_text_response() {
    assert_eq!(
        serialize_response(&text("hello")),
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello".to_vec()
    );
}

#[test]
fn test_serialize_head_excludes_body() {
    let head = serialize_head(&text("hello"));
    assert!(head.ends_with(b"Content-Length: 5\r\n\r\n"));
}

#[tokio::test]
async fn test_response_writer_writes_head_and_body() {
    let mut writer = ResponseWriter::new(text("hello"));
    let mut out: Vec<u8> = Vec::new();

    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(out, serialize_response(&text("hello")));
}

#[tokio::test]
async fn test_response_writer_status_only() {
    let mut writer = ResponseWriter::new(Response::empty(StatusCode::Created));
    let mut out: Vec<u8> = Vec::new();

    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(out, b"HTTP/1.1 201 Created\r\n\r\n".to_vec());
}
