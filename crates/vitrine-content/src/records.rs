//! Content record types.
//!
//! Field names serialize in camelCase so JSON output matches the shape
//! the portfolio API has always served.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A long-form article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    pub category: String,
    pub read_time: String,
    pub image_url: String,
    pub likes: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
}

/// A short free-standing thought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    pub id: String,
    pub content: String,
    pub author_name: String,
    pub author_image: String,
    pub likes: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
}

/// A video course playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub category: String,
    pub total_duration: String,
    pub total_videos: u32,
    pub views: u32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// A single video within a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: Option<String>,
    pub duration: String,
    pub order_index: u32,
    pub views: u32,
    pub created_at: DateTime<Utc>,
}
