//! Request and response bodies exchanged with the learning backend.

use core_types::UserProfile;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Query parameter carrying the playlist id on `/api/playlist-videos`.
pub const PLAYLIST_ID_PARAM: &str = "playlistId";

/// Response from `GET /users/profile`.
///
/// Only `success` decides verification. The rest of the body is
/// free-form and must not make decoding fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Missing is the same as `false`.
    #[serde(default)]
    pub success: bool,
    /// Raw account payload; never persisted
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
}

impl ProfileResponse {
    /// Whether the backend accepted the token.
    pub fn is_verified(&self) -> bool {
        self.success
    }
}

/// Body for `POST /users/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /users/login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub token: Option<String>,
    /// `None` when the backend sends no object or one that does not decode
    #[serde(default, deserialize_with = "lenient_profile")]
    pub user: Option<UserProfile>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
}

/// Body for `POST /api/quiz/generate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    pub video_id: String,
}

/// Error body returned by the backend.
///
/// Endpoints disagree on the field name, so both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiError {
    /// The human-readable text, preferring `error` over `message`.
    pub fn text(&self) -> Option<&str> {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }
}

/// Keep strings, drop anything else.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

fn lenient_profile<'de, D>(deserializer: D) -> Result<Option<UserProfile>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_response_success() {
        let resp: ProfileResponse =
            serde_json::from_str(r#"{"success":true,"user":{"email":"a@b.c"}}"#).unwrap();

        assert!(resp.is_verified());
        assert_eq!(resp.user.unwrap()["email"], "a@b.c");
    }

    #[test]
    fn test_profile_response_verified_regardless_of_user_shape() {
        let bodies = [
            r#"{"success":true,"user":{"email":null}}"#,
            r#"{"success":true,"user":{"email":"a@b.c","tokens":12.5}}"#,
            r#"{"success":true,"user":{"tokens":null,"fullname":{"firstname":null}}}"#,
            r#"{"success":true,"user":"64f1c0ffee"}"#,
            r#"{"success":true,"user":[1,2,3],"message":{"detail":"ok"}}"#,
        ];

        for body in bodies {
            let resp: ProfileResponse = serde_json::from_str(body).unwrap();
            assert!(resp.is_verified(), "{body}");
        }
    }

    #[test]
    fn test_profile_response_missing_success_is_unverified() {
        let resp: ProfileResponse = serde_json::from_str(r#"{"user":null}"#).unwrap();

        assert!(!resp.is_verified());
    }

    #[test]
    fn test_profile_response_non_bool_success_is_rejected() {
        let parsed = serde_json::from_str::<ProfileResponse>(r#"{"success":"yes"}"#);

        assert!(parsed.is_err());
    }

    #[test]
    fn test_generate_quiz_request_uses_camel_case() {
        let req = GenerateQuizRequest {
            video_id: "v1".to_string(),
        };

        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json, serde_json::json!({ "videoId": "v1" }));
    }

    #[test]
    fn test_api_error_text_preference() {
        let both: ApiError =
            serde_json::from_str(r#"{"error":"bad id","message":"other"}"#).unwrap();
        let message_only: ApiError = serde_json::from_str(r#"{"message":"no quiz"}"#).unwrap();
        let blank: ApiError = serde_json::from_str(r#"{"error":"  "}"#).unwrap();

        assert_eq!(both.text(), Some("bad id"));
        assert_eq!(message_only.text(), Some("no quiz"));
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn test_login_response_defaults() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();

        assert!(!resp.success);
        assert!(resp.token.is_none());
        assert_eq!(resp.message.as_deref(), Some("nope"));
    }

    #[test]
    fn test_login_response_tolerates_null_profile_fields() {
        let body = r#"{
            "success": true,
            "token": "abc123",
            "user": { "email": "a@b.c", "fullname": { "firstname": null }, "tokens": null }
        }"#;

        let resp: LoginResponse = serde_json::from_str(body).unwrap();

        assert!(resp.success);
        assert_eq!(resp.token.as_deref(), Some("abc123"));
        let user = resp.user.unwrap();
        assert_eq!(user.email, "a@b.c");
        assert_eq!(user.tokens, 0);
    }

    #[test]
    fn test_login_response_drops_undecodable_user() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"success":true,"token":"abc123","user":"64f1c0ffee"}"#)
                .unwrap();

        assert!(resp.success);
        assert!(resp.user.is_none());
    }
}
