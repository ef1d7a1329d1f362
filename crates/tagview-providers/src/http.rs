//! HTTP post source.
//!
//! Issues exactly one `GET {endpoint}?limit=100` and decodes the `posts`
//! envelope. The limit is a constant of the viewer, not a setting.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tagview_types::{Post, PostsResponse};
use url::Url;

use crate::source::PostSource;
use crate::{Error, Result};

/// Default remote endpoint for posts.
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/posts";

/// Maximum number of posts requested (and kept) per fetch.
pub const POST_LIMIT: usize = 100;

const LIMIT_PARAM: &str = "limit";

const USER_AGENT_VALUE: &str = concat!("tagview/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpPostSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpPostSource {
    pub fn new(endpoint: &str) -> Result<Self> {
        let url = request_url(endpoint)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT_VALUE)
            .build()?;

        Ok(Self { client, url })
    }

    /// Fully built request URL, limit included.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl PostSource for HttpPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        tracing::debug!("Fetching posts from {}", self.url);

        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let mut posts = PostsResponse::from_slice(&body)?.posts;
        posts.truncate(POST_LIMIT);

        tracing::info!(count = posts.len(), "fetched posts");
        Ok(posts)
    }
}

// Replaces any caller-supplied limit so the ceiling always applies.
fn request_url(endpoint: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidEndpoint(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != LIMIT_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(LIMIT_PARAM, &POST_LIMIT.to_string());

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_adds_limit() {
        let url = request_url("https://dummyjson.com/posts").unwrap();
        assert_eq!(url.as_str(), "https://dummyjson.com/posts?limit=100");
    }

    #[test]
    fn test_request_url_overrides_limit() {
        let url = request_url("https://dummyjson.com/posts?limit=5&select=title").unwrap();
        assert_eq!(
            url.as_str(),
            "https://dummyjson.com/posts?select=title&limit=100"
        );
    }

    #[test]
    fn test_rejects_relative_and_non_http_endpoints() {
        assert!(matches!(
            HttpPostSource::new("posts"),
            Err(Error::InvalidEndpoint(_))
        ));
        assert!(matches!(
            HttpPostSource::new("ftp://example.com/posts"),
            Err(Error::InvalidEndpoint(_))
        ));
    }
}
