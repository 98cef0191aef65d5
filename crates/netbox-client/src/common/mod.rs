//! Common utilities for NetBox API client
//!
//! Provides the authenticated HTTP wrapper shared by every collection.

pub mod query;

use crate::error::NetBoxError;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Paginated response wrapper from NetBox API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// HTTP client wrapper with authentication
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Send an authenticated GET and map non-success statuses to errors
    async fn send_get(&self, url: &str, what: &str) -> Result<Response, NetBoxError> {
        let response = self.client
            .get(url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(NetBoxError::Http)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => NetBoxError::NotFound(format!("{} - {}", what, body)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => NetBoxError::Authentication(format!(
                "{} - {}",
                status, body
            )),
            _ => NetBoxError::Api(format!("GET {} failed: {} - {}", what, status, body)),
        })
    }

    /// Decode a JSON body, keeping the head of the payload for diagnostics
    fn decode<T: for<'de> Deserialize<'de>>(response_text: &str) -> Result<T, NetBoxError> {
        serde_json::from_str(response_text).map_err(|e| {
            NetBoxError::Api(format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                response_text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Fetch all pages of a paginated response
    pub async fn fetch_all_pages<T: for<'de> Deserialize<'de>>(
        &self,
        mut url: String,
    ) -> Result<Vec<T>, NetBoxError> {
        let mut all_results = Vec::new();

        loop {
            debug!("Fetching page: {}", url);

            let response = self.send_get(&url, &url).await?;
            let response_text = response.text().await?;
            let page: PaginatedResponse<T> = Self::decode(&response_text)?;
            all_results.extend(page.results);

            match page.next {
                Some(next_url) => {
                    url = self.build_url(&next_url);
                }
                None => break,
            }
        }

        debug!("Fetched {} records", all_results.len());
        Ok(all_results)
    }

    /// Make a GET request
    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, NetBoxError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.send_get(&url, path).await?;
        let response_text = response.text().await?;
        Self::decode(&response_text)
    }

    /// Build query string from filters
    pub fn build_query_string(&self, filters: &[(&str, &str)]) -> String {
        filters
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Device, Rack};
    use crate::test_utils::{Reply, page_json, rack_json, serve};

    fn http() -> HttpClient {
        HttpClient::new(Client::new(), "http://netbox:8000/".to_string(), "abc".to_string())
    }

    #[test]
    fn test_base_url_is_trimmed() {
        assert_eq!(http().base_url(), "http://netbox:8000");
    }

    #[test]
    fn test_build_url_keeps_absolute_next_links() {
        let http = http();
        assert_eq!(
            http.build_url("/api/dcim/racks/"),
            "http://netbox:8000/api/dcim/racks/"
        );
        assert_eq!(
            http.build_url("https://other/api/dcim/racks/?offset=50"),
            "https://other/api/dcim/racks/?offset=50"
        );
    }

    #[test]
    fn test_query_string_is_encoded() {
        let query = http().build_query_string(&[("name", "Row A/01"), ("rack_id", "7")]);
        assert_eq!(query, "name=Row%20A%2F01&rack_id=7");
    }

    #[test]
    fn test_auth_header_uses_token_scheme() {
        assert_eq!(http().auth_header(), "Token abc");
    }

    #[test]
    fn test_debug_hides_token() {
        assert!(!format!("{:?}", http()).contains("abc"));
    }

    #[test]
    fn test_decode_error_includes_body_head() {
        let err = HttpClient::decode::<PaginatedResponse<u64>>("<html>oops</html>").unwrap_err();
        assert!(err.to_string().contains("<html>oops</html>"));
    }

    fn local(base_url: &str) -> HttpClient {
        HttpClient::new(Client::new(), base_url.to_string(), "abc".to_string())
    }

    #[tokio::test]
    async fn test_fetch_all_pages_follows_absolute_next_link() {
        let (base_url, server) = serve(|base| {
            vec![
                Reply::json(200, page_json(
                    vec![rack_json(base, 1, "A")],
                    Some(format!("{}/api/dcim/racks/?limit=1&offset=1", base)),
                )),
                Reply::json(200, page_json(vec![rack_json(base, 2, "B")], None)),
            ]
        })
        .await;

        let http = local(&base_url);
        let racks: Vec<Rack> = http.fetch_all_pages(http.build_url("/api/dcim/racks/")).await.unwrap();
        let names: Vec<_> = racks.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);

        assert_eq!(
            server.await.unwrap(),
            vec![
                "GET /api/dcim/racks/ HTTP/1.1",
                "GET /api/dcim/racks/?limit=1&offset=1 HTTP/1.1",
            ]
        );
    }

    #[tokio::test]
    async fn test_404_maps_to_not_found() {
        let (base_url, server) = serve(|_| {
            vec![Reply::json(404, serde_json::json!({"detail": "No Device matches the given query."}))]
        })
        .await;

        let err = local(&base_url).get::<Device>("/api/dcim/devices/5/").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("/api/dcim/devices/5/"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_401_maps_to_authentication() {
        let (base_url, server) = serve(|_| {
            vec![Reply::json(401, serde_json::json!({"detail": "Invalid token"}))]
        })
        .await;

        let err = local(&base_url).get::<Device>("/api/dcim/devices/5/").await.unwrap_err();
        assert!(matches!(err, NetBoxError::Authentication(ref msg) if msg.contains("Invalid token")));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api() {
        let (base_url, server) = serve(|_| vec![Reply::text(500, "Internal Server Error")]).await;

        let err = local(&base_url).get::<Device>("/api/dcim/devices/5/").await.unwrap_err();
        assert!(matches!(err, NetBoxError::Api(ref msg) if msg.contains("500")));
        assert!(!err.is_not_found());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_api_error() {
        let (base_url, server) = serve(|_| vec![Reply::text(200, "<html>Please log in</html>")]).await;

        let http = local(&base_url);
        let err = http
            .fetch_all_pages::<Rack>(http.build_url("/api/dcim/racks/"))
            .await
            .unwrap_err();
        assert!(matches!(err, NetBoxError::Api(ref msg) if msg.contains("<html>Please log in</html>")));
        server.await.unwrap();
    }
}
