//! Core types for the quizzy learning client.
//!
//! This crate defines the domain data shared by the session layer,
//! the wire payloads, and the views: the cached user profile snapshot,
//! playlists, videos, and generated quizzes.

use serde::{Deserialize, Deserializer, Serialize};

/// A user's first and last name, as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FullName {
    #[serde(alias = "firstname", deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(alias = "lastname", deserialize_with = "null_as_default")]
    pub last_name: String,
}

/// Cached copy of the signed-in user's account data.
///
/// Written once at login and read by views for display. It is never
/// reconciled with the backend, so it may be stale. Null fields decode
/// to their defaults, and `tokens` also accepts floats and numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Account email
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Display name parts
    #[serde(alias = "fullname", deserialize_with = "null_as_default")]
    pub full_name: FullName,
    /// Token balance earned from quizzes
    #[serde(deserialize_with = "lenient_tokens")]
    pub tokens: u64,
}

impl UserProfile {
    /// Name to show in greetings, falling back to the email.
    pub fn display_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.full_name.first_name.trim(),
            self.full_name.last_name.trim()
        );
        let name = name.trim();

        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

/// A single video inside a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// YouTube video identifier
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Thumbnail URL, when the backend provides one
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Video {
    /// Thumbnail to render, derived from the video id when absent.
    pub fn thumbnail_url(&self) -> String {
        match &self.thumbnail {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", self.id),
        }
    }

    /// Embeddable player URL.
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.id)
    }
}

/// A playlist and its videos, as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Playlist {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<Video>,
}

impl Playlist {
    /// The video selected when the playlist is first opened.
    pub fn first_video(&self) -> Option<&Video> {
        self.videos.first()
    }

    /// Look up a video by id.
    pub fn video(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }
}

/// One multiple-choice question of a generated quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: usize,
}

/// A quiz generated from a video's transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the backend produced no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Token balances arrive as integers, floats, numeric strings or null.
fn lenient_tokens<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Whole(u64),
        Fractional(f64),
        Text(String),
    }

    Ok(match Option::<Amount>::deserialize(deserializer)? {
        Some(Amount::Whole(n)) => n,
        Some(Amount::Fractional(f)) if f.is_finite() && f > 0.0 => f.trunc() as u64,
        Some(Amount::Text(text)) => text.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_decodes_camel_case() {
        let json = r#"{
            "email": "ada@example.com",
            "fullName": { "firstName": "Ada", "lastName": "Lovelace" },
            "tokens": 120
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.full_name.first_name, "Ada");
        assert_eq!(profile.tokens, 120);
        assert_eq!(profile.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_profile_accepts_lowercase_name_keys() {
        let json = r#"{"email":"a@b.c","fullname":{"firstname":"Grace","lastname":"Hopper"}}"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.display_name(), "Grace Hopper");
        let reencoded = serde_json::to_string(&profile).unwrap();
        assert!(reencoded.contains("\"fullName\":{\"firstName\":\"Grace\""));
    }

    #[test]
    fn test_profile_missing_fields_default() {
        let profile: UserProfile = serde_json::from_str(r#"{"email":"x@y.z"}"#).unwrap();

        assert_eq!(profile.tokens, 0);
        assert_eq!(profile.full_name, FullName::default());
    }

    #[test]
    fn test_profile_null_fields_default() {
        let json = r#"{
            "email": null,
            "fullname": { "firstname": null, "lastname": "Hopper" },
            "tokens": null
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.email, "");
        assert_eq!(profile.full_name.first_name, "");
        assert_eq!(profile.full_name.last_name, "Hopper");
        assert_eq!(profile.tokens, 0);
    }

    #[test]
    fn test_profile_null_full_name_defaults() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"email":"a@b.c","fullName":null}"#).unwrap();

        assert_eq!(profile.full_name, FullName::default());
        assert_eq!(profile.display_name(), "a@b.c");
    }

    #[test]
    fn test_profile_tokens_accept_loose_numbers() {
        let parse = |tokens: &str| {
            let json = format!(r#"{{"tokens":{tokens}}}"#);
            serde_json::from_str::<UserProfile>(&json).unwrap().tokens
        };

        assert_eq!(parse("2500"), 2500);
        assert_eq!(parse("12.5"), 12);
        assert_eq!(parse("-3"), 0);
        assert_eq!(parse(r#""750""#), 750);
        assert_eq!(parse(r#""lots""#), 0);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let profile = UserProfile {
            email: "anon@example.com".to_string(),
            ..Default::default()
        };

        assert_eq!(profile.display_name(), "anon@example.com");
    }

    #[test]
    fn test_video_thumbnail_fallback() {
        let video = Video {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Intro".to_string(),
            description: String::new(),
            thumbnail: None,
        };

        assert_eq!(
            video.thumbnail_url(),
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
        assert_eq!(video.embed_url(), "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[test]
    fn test_playlist_lookup() {
        let json = r#"{"videos":[
            {"id":"a","title":"First"},
            {"id":"b","title":"Second","description":"more"}
        ]}"#;

        let playlist: Playlist = serde_json::from_str(json).unwrap();

        assert_eq!(playlist.first_video().map(|v| v.id.as_str()), Some("a"));
        assert_eq!(playlist.video("b").map(|v| v.description.as_str()), Some("more"));
        assert!(playlist.video("c").is_none());
        assert!(playlist.title.is_none());
    }

    #[test]
    fn test_playlist_null_fields_default() {
        let json = r#"{"title":null,"videos":[{"id":"a","title":"First","description":null}]}"#;

        let playlist: Playlist = serde_json::from_str(json).unwrap();
        assert_eq!(playlist.videos[0].description, "");

        let empty: Playlist = serde_json::from_str(r#"{"videos":null}"#).unwrap();
        assert!(empty.videos.is_empty());
    }

    #[test]
    fn test_quiz_decodes_correct_answer() {
        let json = r#"{"questions":[
            {"question":"2+2?","options":["3","4"],"correctAnswer":1}
        ]}"#;

        let quiz: Quiz = serde_json::from_str(json).unwrap();

        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz.questions[0].correct_answer, 1);
        assert!(Quiz::default().is_empty());
    }
}
