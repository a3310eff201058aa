//! Thin async client for the Open Library search API.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::core::config::OpenLibraryConfig;
use crate::core::{Error, Result};
use crate::domains::tools::ToolError;

/// Number of documents requested per author search.
pub const SEARCH_LIMIT: u32 = 20;

/// Bytes escaped in a query component: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Open Library client shared by every `search_author` invocation.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted,
/// so all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    http: Client,
    base_url: Url,
}

impl OpenLibraryClient {
    /// Build a client from configuration.
    ///
    /// Fails if the base URL cannot be parsed or the HTTP client cannot be
    /// constructed (e.g. an invalid User-Agent value).
    pub fn new(config: &OpenLibraryConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::config(format!(
                "Invalid Open Library URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// The request URL for an author search.
    pub fn author_search_url(&self, author: &str) -> Url {
        let mut url = self.base_url.clone();
        let base_path = self.base_url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}/search.json", base_path));
        url.set_query(Some(&format!(
            "author={}&limit={}",
            encode_component(author),
            SEARCH_LIMIT
        )));
        url
    }

    /// Search books by author and return the response body as-is.
    ///
    /// One attempt only. A non-success status is reported before the body is
    /// read, so error pages that are not JSON still yield the status code.
    pub async fn search_by_author(&self, author: &str) -> std::result::Result<Value, ToolError> {
        let url = self.author_search_url(author);
        debug!(%url, "Querying Open Library");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::remote_request(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Percent-encode a single query component, UTF-8 first.
///
/// Space becomes `%20`, never the form-encoding `+`.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> OpenLibraryClient {
        OpenLibraryClient::new(&OpenLibraryConfig {
            base_url: base_url.to_string(),
            user_agent: "test-agent".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_encode_component_escapes_unsafe_characters() {
        assert_eq!(encode_component("J.R.R. Tolkien"), "J.R.R.%20Tolkien");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("C++ #1?"), "C%2B%2B%20%231%3F");
        assert_eq!(encode_component("Gabriel García Márquez"), "Gabriel%20Garc%C3%ADa%20M%C3%A1rquez");
        assert_eq!(encode_component("50%/50%"), "50%25%2F50%25");
    }

    #[test]
    fn test_encode_component_keeps_unreserved_marks() {
        assert_eq!(encode_component("O'Brien"), "O'Brien");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("a+b"), "a%2Bb");
        assert_eq!(encode_component("[x]"), "%5Bx%5D");
    }

    #[test]
    fn test_author_search_url_keeps_marks_raw() {
        let client = client_for("https://openlibrary.org");
        let url = client.author_search_url("Le Guin (Ursula)*~!");
        assert_eq!(
            url.as_str(),
            "https://openlibrary.org/search.json?author=Le%20Guin%20(Ursula)*~!&limit=20"
        );
    }

    #[test]
    fn test_author_search_url_default_endpoint() {
        let client = client_for("https://openlibrary.org");
        let url = client.author_search_url("Ursula K. Le Guin");
        assert_eq!(
            url.as_str(),
            "https://openlibrary.org/search.json?author=Ursula%20K.%20Le%20Guin&limit=20"
        );
    }

    #[test]
    fn test_author_search_url_keeps_base_path() {
        let client = client_for("http://localhost:8000/mirror/");
        let url = client.author_search_url("Borges");
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/mirror/search.json?author=Borges&limit=20"
        );
    }

    #[test]
    fn test_author_cannot_inject_query_parameters() {
        let client = client_for("https://openlibrary.org");
        let url = client.author_search_url("x&limit=1000");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("author".to_string(), "x&limit=1000".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = OpenLibraryClient::new(&OpenLibraryConfig {
            base_url: "not a url".to_string(),
            user_agent: "test-agent".to_string(),
        });
        assert!(result.is_err());
    }
}
