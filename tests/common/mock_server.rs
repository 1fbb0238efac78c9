//! Mock HTTP server for image list and image download tests.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

use grunge::services::image_source::BROWSER_ACCEPT;

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockHttpServer {
    pub server: MockServer,
}

impl MockHttpServer {
    /// Start a new mock HTTP server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get URL for a specific path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    /// Mock an image list: one URL per line, CRLF separated
    pub async fn mock_list(&self, endpoint: &str, urls: &[String]) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(urls.join("\r\n"))
                    .insert_header("content-type", "text/plain"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock an image download; only answers requests with the browser
    /// Accept header
    pub async fn mock_image(&self, endpoint: &str, bytes: Vec<u8>, content_type: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(|req: &Request| {
                req.headers.get("accept").and_then(|v| v.to_str().ok()) == Some(BROWSER_ACCEPT)
            })
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(bytes)
                    .insert_header("content-type", content_type),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock an error endpoint that must be requested exactly `times` times;
    /// checked when the server is dropped
    pub async fn mock_error_expecting(&self, endpoint: &str, status: u16, times: u64) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint that returns an error
    pub async fn mock_error(&self, endpoint: &str, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(message))
            .mount(&self.server)
            .await;
    }
}
