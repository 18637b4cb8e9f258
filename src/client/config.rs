const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: String,
    token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let server_url =
            std::env::var("STAYHUB_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self {
            server_url,
            token: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_path() {
        let config = ClientConfig {
            server_url: "http://127.0.0.1:3000".to_string(),
            token: None,
        };
        assert_eq!(
            config.api_url("/api/auth/login"),
            "http://127.0.0.1:3000/api/auth/login"
        );
    }

    #[test]
    fn token_roundtrip() {
        let mut config = ClientConfig {
            server_url: "http://x".to_string(),
            token: None,
        };
        config.set_token(Some("abc".to_string()));
        assert_eq!(config.token(), Some("abc"));
        config.clear_token();
        assert!(config.token().is_none());
    }
}
