//! HTTP client for the learning backend.

use core_types::{Playlist, Quiz};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use session::{ApiConfig, ProfileVerifier, Session, Storage};
use thiserror::Error;
use web_sys::RequestCredentials;
use web_types::{
    ApiError as ErrorBody, GenerateQuizRequest, LoginRequest, LoginResponse, PLAYLIST_ID_PARAM,
    ProfileResponse,
};

/// Errors from backend calls.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] gloo_net::Error),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl ApiError {
    /// Message suitable for showing in a view.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected(message)
                if !message.is_empty() =>
            {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

/// Result type for backend calls.
pub type Result<T> = std::result::Result<T, ApiError>;

/// HTTP verb of a backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
}

/// Everything that decides how a request goes out, minus the body.
#[derive(Debug, Clone, PartialEq)]
struct Call {
    verb: Verb,
    url: String,
    query: Vec<(&'static str, String)>,
    /// At most one `Authorization` value
    authorization: Option<String>,
    credentials: RequestCredentials,
}

impl Call {
    fn builder(&self) -> RequestBuilder {
        let builder = match self.verb {
            Verb::Get => Request::get(&self.url),
            Verb::Post => Request::post(&self.url),
        }
        .credentials(self.credentials);

        let builder = if self.query.is_empty() {
            builder
        } else {
            builder.query(self.query.iter().map(|(key, value)| (*key, value.as_str())))
        };

        match &self.authorization {
            Some(value) => builder.header("Authorization", value),
            None => builder,
        }
    }
}

/// Client for the learning backend.
///
/// Every request carries cookies. A bearer token is attached when the
/// client was built with one.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            token: None,
        }
    }

    /// Client for the `API_URL` baked in at build time.
    pub fn from_build_env() -> Self {
        let config = ApiConfig::from_env_value(option_env!("API_URL")).unwrap_or_else(|e| {
            log::error!("{e}; falling back to {}", session::DEFAULT_API_URL);
            ApiConfig::default()
        });
        Self::new(config)
    }

    /// Client that authenticates with the session's current token.
    pub fn for_session<S: Storage>(session: &Session<S>) -> Self {
        Self::from_build_env().with_token(session.token())
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Fetch the profile for a specific token.
    pub async fn profile(&self, token: &str) -> Result<ProfileResponse> {
        let resp = self.profile_call(token).builder().send().await?;
        read_json(resp).await
    }

    /// Fetch a playlist and its videos.
    pub async fn playlist_videos(&self, playlist_id: &str) -> Result<Playlist> {
        let resp = self.playlist_call(playlist_id).builder().send().await?;
        read_json(resp).await
    }

    /// Ask the backend to generate a quiz from a video.
    pub async fn generate_quiz(&self, video_id: &str) -> Result<Quiz> {
        let body = GenerateQuizRequest {
            video_id: video_id.to_string(),
        };
        let resp = self
            .call(Verb::Post, "/api/quiz/generate")
            .builder()
            .json(&body)?
            .send()
            .await?;
        read_json(resp).await
    }

    /// Exchange credentials for a token and profile.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        let resp = self
            .call(Verb::Post, "/users/login")
            .builder()
            .json(credentials)?
            .send()
            .await?;
        let login: LoginResponse = read_json(resp).await?;

        if !login.success {
            return Err(ApiError::Rejected(login.message.unwrap_or_default()));
        }
        Ok(login)
    }

    fn call(&self, verb: Verb, path: &str) -> Call {
        Call {
            verb,
            url: self.config.endpoint(path),
            query: Vec::new(),
            authorization: self.token.as_deref().map(bearer),
            credentials: RequestCredentials::Include,
        }
    }

    /// The token being verified replaces any token the client holds.
    fn profile_call(&self, token: &str) -> Call {
        Call {
            authorization: Some(bearer(token)),
            ..self.call(Verb::Get, "/users/profile")
        }
    }

    fn playlist_call(&self, playlist_id: &str) -> Call {
        Call {
            query: vec![(PLAYLIST_ID_PARAM, playlist_id.to_string())],
            ..self.call(Verb::Get, "/api/playlist-videos")
        }
    }
}

impl ProfileVerifier for ApiClient {
    type Error = ApiError;

    async fn verify_profile(&self, token: &str) -> Result<ProfileResponse> {
        self.profile(token).await
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

async fn check_status(resp: &Response) -> Result<()> {
    if resp.ok() {
        return Ok(());
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.text().map(str::to_string),
        Err(_) => None,
    }
    .unwrap_or_else(|| resp.status_text());

    Err(ApiError::Status {
        status: resp.status(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    check_status(&resp).await?;
    Ok(resp.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig::new("https://api.example.com/").unwrap())
    }

    #[test]
    fn test_profile_call_matches_verification_contract() {
        let call = client().profile_call("abc123");

        assert_eq!(call.verb, Verb::Get);
        assert_eq!(call.url, "https://api.example.com/users/profile");
        assert_eq!(call.authorization.as_deref(), Some("Bearer abc123"));
        assert_eq!(call.credentials, RequestCredentials::Include);
        assert!(call.query.is_empty());
    }

    #[test]
    fn test_profile_call_uses_only_the_verified_token() {
        let call = client()
            .with_token(Some("stale".to_string()))
            .profile_call("abc123");

        assert_eq!(call.authorization.as_deref(), Some("Bearer abc123"));
    }

    #[test]
    fn test_calls_without_token_send_only_cookies() {
        let call = client().playlist_call("PL123");

        assert_eq!(call.verb, Verb::Get);
        assert_eq!(call.url, "https://api.example.com/api/playlist-videos");
        assert_eq!(call.query, vec![("playlistId", "PL123".to_string())]);
        assert!(call.authorization.is_none());
        assert_eq!(call.credentials, RequestCredentials::Include);
    }

    #[test]
    fn test_session_token_attached_as_bearer() {
        let call = client()
            .with_token(Some("abc123".to_string()))
            .call(Verb::Post, "/api/quiz/generate");

        assert_eq!(call.verb, Verb::Post);
        assert_eq!(call.url, "https://api.example.com/api/quiz/generate");
        assert_eq!(call.authorization.as_deref(), Some("Bearer abc123"));
    }

    #[test]
    fn test_user_message_prefers_backend_text() {
        let status = ApiError::Status {
            status: 404,
            message: "Playlist not found".to_string(),
        };
        let rejected = ApiError::Rejected(String::new());

        assert_eq!(status.user_message("Failed"), "Playlist not found");
        assert_eq!(rejected.user_message("Login failed"), "Login failed");
    }
}
