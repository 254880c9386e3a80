//! Wire models for the forum API
//!
//! Typed payloads exchanged with the imageboard backend. `created_at`
//! timestamps come back in whatever format the backend's database renders,
//! so they are kept as opaque strings; only `/time` promises ISO-8601 UTC
//! and gets parsed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A board as returned by `GET /boards`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Backend identifier
    pub id: i64,
    /// Short board name, as used in URLs (e.g. "tech")
    pub name: String,
}

/// One row of `GET /{board}/threads`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub id: i64,
    pub title: String,
    /// Backend-formatted timestamp, kept opaque
    pub created_at: String,
}

/// Full thread from `GET /{board}/thread/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadDetail {
    pub id: i64,
    pub title: String,
    pub created_at: String,
    /// Posts in the thread, oldest first
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// A single post within a thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub created_at: String,
}

/// Request body for `POST /{board}/create_thread`
#[derive(Debug, Clone, Serialize)]
pub struct NewThread {
    pub title: String,
    pub message: String,
}

/// Request body for `POST /{board}/{thread}/create_post`
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub content: String,
}

/// Acknowledgement returned by the create endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Created {
    /// Identifier of the created resource
    pub id: i64,
    /// Set by endpoints that echo the row's timestamp
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload of `GET /time`
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTime {
    /// ISO-8601 UTC timestamp, e.g. "2024-07-15T14:00:00Z"
    pub time: String,
}

impl ServerTime {
    /// Parses the backend timestamp, `None` if it is not valid ISO-8601.
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.time)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    /// Sample board list as the backend returns it
    const BOARDS_JSON: &str = r#"[
        {"id": 1, "name": "tech"},
        {"id": 2, "name": "random"}
    ]"#;

    /// Sample thread list for a board
    const THREADS_JSON: &str = r#"[
        {"id": 7, "title": "Favourite editors?", "created_at": "2024-07-15 14:00:00"},
        {"id": 9, "title": "Keyboard advice", "created_at": "2024-07-16 09:30:00"}
    ]"#;

    /// Sample thread detail with posts
    const THREAD_JSON: &str = r#"{
        "id": 7,
        "title": "Favourite editors?",
        "created_at": "2024-07-15 14:00:00",
        "posts": [
            {"id": 21, "content": "vim, obviously", "created_at": "2024-07-15 14:05:00"},
            {"id": 22, "content": "ed is the standard", "created_at": "2024-07-15 14:09:00"}
        ]
    }"#;

    #[test]
    fn test_parse_board_list() {
        let boards: Vec<Board> = serde_json::from_str(BOARDS_JSON).expect("Failed to parse boards");

        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].id, 1);
        assert_eq!(boards[0].name, "tech");
        assert_eq!(boards[1].name, "random");
    }

    #[test]
    fn test_parse_thread_list() {
        let threads: Vec<ThreadSummary> =
            serde_json::from_str(THREADS_JSON).expect("Failed to parse threads");

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].id, 7);
        assert_eq!(threads[0].title, "Favourite editors?");
        assert_eq!(threads[1].created_at, "2024-07-16 09:30:00");
    }

    #[test]
    fn test_parse_thread_detail_with_posts() {
        let thread: ThreadDetail =
            serde_json::from_str(THREAD_JSON).expect("Failed to parse thread");

        assert_eq!(thread.id, 7);
        assert_eq!(thread.posts.len(), 2);
        assert_eq!(thread.posts[0].content, "vim, obviously");
        assert_eq!(thread.posts[1].id, 22);
    }

    #[test]
    fn test_parse_thread_detail_without_posts_field() {
        // Threads with no replies may omit the posts array entirely.
        let json = r#"{"id": 3, "title": "empty", "created_at": "2024-07-15 14:00:00"}"#;
        let thread: ThreadDetail = serde_json::from_str(json).expect("Failed to parse thread");

        assert!(thread.posts.is_empty());
    }

    #[test]
    fn test_parse_created_ack() {
        let created: Created =
            serde_json::from_str(r#"{"id": 42}"#).expect("Failed to parse ack");
        assert_eq!(created.id, 42);
        assert!(created.created_at.is_none());

        let created: Created =
            serde_json::from_str(r#"{"id": 43, "created_at": "2024-07-15 14:00:00"}"#)
                .expect("Failed to parse ack");
        assert_eq!(created.created_at.as_deref(), Some("2024-07-15 14:00:00"));
    }

    #[test]
    fn test_server_time_parses_iso8601() {
        let time = ServerTime {
            time: "2024-07-15T14:00:30Z".to_string(),
        };

        let parsed = time.parse().expect("Should parse ISO-8601");
        assert_eq!(parsed.hour(), 14);
        assert_eq!(parsed.second(), 30);
    }

    #[test]
    fn test_server_time_parse_invalid() {
        let time = ServerTime {
            time: "not a timestamp".to_string(),
        };
        assert!(time.parse().is_none());
    }

    #[test]
    fn test_thread_summary_serialization_roundtrip() {
        let thread = ThreadSummary {
            id: 7,
            title: "Favourite editors?".to_string(),
            created_at: "2024-07-15 14:00:00".to_string(),
        };

        let json = serde_json::to_string(&thread).expect("Failed to serialize");
        let back: ThreadSummary = serde_json::from_str(&json).expect("Failed to deserialize");

        assert_eq!(back, thread);
    }
}
