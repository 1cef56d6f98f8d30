//! API client for backend communication

use serde::de::DeserializeOwned;

/// Endpoint that computes ping aliases for a username/nickname pair.
pub const ALIAS_ENDPOINT: &str = "/api/v1/discord_name";

/// Build the alias lookup path. Both parameters are always present in the
/// query string, nickname included even when it is empty.
pub fn alias_query_path(username: &str, nickname: &str) -> String {
    format!(
        "{}?username={}&nickname={}",
        ALIAS_ENDPOINT,
        urlencoding::encode(username),
        urlencoding::encode(nickname)
    )
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);

        let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;

        // The status code is deliberately not inspected: the backend answers
        // every request with a JSON body, so any decodable body is treated as
        // the payload and a non-JSON error page surfaces as a decode error.
        response.json::<T>().await.map_err(|e| e.to_string())
    }

    /// GET the alias list for the given field values.
    pub async fn ping_aliases(
        &self,
        username: &str,
        nickname: &str,
    ) -> Result<Vec<String>, String> {
        self.get(&alias_query_path(username, nickname)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_path_carries_both_params() {
        assert_eq!(
            alias_query_path("alice", "al"),
            "/api/v1/discord_name?username=alice&nickname=al"
        );
    }

    #[test]
    fn test_empty_nickname_still_present() {
        assert_eq!(
            alias_query_path("alice", ""),
            "/api/v1/discord_name?username=alice&nickname="
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        assert_eq!(
            alias_query_path("a b#c", "x&y=z"),
            "/api/v1/discord_name?username=a%20b%23c&nickname=x%26y%3Dz"
        );
    }

    #[test]
    fn test_non_ascii_values_encode_as_utf8() {
        assert_eq!(
            alias_query_path("ülle", ""),
            "/api/v1/discord_name?username=%C3%BClle&nickname="
        );
    }

    #[test]
    fn test_alias_payload_decodes_as_string_array() {
        let aliases: Vec<String> =
            serde_json::from_str(r#"["alice#1","alice_2","ALICE"]"#).unwrap();
        assert_eq!(aliases, vec!["alice#1", "alice_2", "ALICE"]);
    }

    #[test]
    fn test_non_json_error_page_fails_to_decode() {
        // A plain-text 500 page is a decode failure, not a rendered payload.
        assert!(serde_json::from_str::<Vec<String>>("Internal Server Error").is_err());
    }
}
