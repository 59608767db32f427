#![cfg(test)]

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::response::Response;
use bytes::{Bytes, BytesMut};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::infra::app::create_app;
use crate::tests::fakes::FakePlatform;
use crate::tests::fixtures::{test_config, test_state};

pub const BOUNDARY: &str = "TestBoundary1234";

pub struct MultipartFile<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

pub fn test_app(platform: &FakePlatform) -> Router {
    create_app(&test_config(), test_state(platform))
}

pub fn session_cookie(token: &str) -> String {
    format!("sb-access-token={}", token)
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: Router, uri: &str, body: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn post_multipart(app: Router, uri: &str, body: Bytes, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY));
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn build_multipart_body(fields: &[(&str, &str)], file: Option<MultipartFile<'_>>) -> Bytes {
    let mut body = BytesMut::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes());
        body.extend_from_slice(format!("{}\r\n", value).as_bytes());
    }
    if let Some(file) = file {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"avatar\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                file.file_name, file.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body.freeze()
}

/// Value of the first `<input name="{name}" value="...">` in the page.
pub fn input_value(html: &str, name: &str) -> Option<String> {
    let marker = format!(r#"name="{}" value=""#, name);
    match html.find(&marker) {
        Some(found) => {
            let start = found + marker.len();
            let end = html[start..].find('"')?;
            Some(html[start..start + end].to_string())
        }
        None => textarea_value(html, name),
    }
}

fn textarea_value(html: &str, name: &str) -> Option<String> {
    let tag = html.find("<textarea")?;
    let open = &html[tag..];
    let close = open.find('>')?;
    if !open[..close].contains(&format!(r#"name="{}""#, name)) {
        return None;
    }
    let body = &open[close + 1..];
    let end = body.find("</textarea>")?;
    Some(body[..end].to_string())
}
