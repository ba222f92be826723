//! Static content store for the vitrine portfolio.
//!
//! The store holds the site's articles, thoughts and course playlists
//! as constant in-process data, mirroring the mock API the portfolio
//! has always served. There is no persistence and no mutation; the
//! only operations are listing, lookup by id, and JSON export.

mod records;
mod seed;

pub use records::{Article, Course, Thought, Video};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to serialize content: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The in-process content store.
#[derive(Debug, Clone)]
pub struct ContentStore {
    articles: Vec<Article>,
    thoughts: Vec<Thought>,
    courses: Vec<Course>,
    videos: Vec<Video>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    /// Build the store with the built-in content set.
    pub fn new() -> Self {
        Self {
            articles: seed::articles(),
            thoughts: seed::thoughts(),
            courses: seed::courses(),
            videos: seed::videos(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn thoughts(&self) -> &[Thought] {
        &self.thoughts
    }

    pub fn thought(&self, id: &str) -> Option<&Thought> {
        self.thoughts.iter().find(|t| t.id == id)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Videos belonging to a course, ordered by their playlist index.
    pub fn course_videos(&self, course_id: &str) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self
            .videos
            .iter()
            .filter(|v| v.course_id == course_id)
            .collect();
        videos.sort_by_key(|v| v.order_index);
        videos
    }

    /// Serialize any record list as pretty JSON, in the shape the
    /// original API served it.
    pub fn to_json<T: Serialize>(records: &[T]) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_is_populated() {
        let store = ContentStore::new();
        assert!(!store.articles().is_empty());
        assert!(!store.thoughts().is_empty());
        assert!(!store.courses().is_empty());
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let store = ContentStore::new();
        assert!(store.article("1").is_some());
        assert!(store.article("999").is_none());
        assert!(store.thought("2").is_some());
        assert!(store.thought("missing").is_none());
    }

    #[test]
    fn test_course_videos_are_ordered() {
        let store = ContentStore::new();
        let videos = store.course_videos("1");
        assert_eq!(videos.len(), 3);
        let indices: Vec<u32> = videos.iter().map(|v| v.order_index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_course_videos_unknown_course_is_empty() {
        let store = ContentStore::new();
        assert!(store.course_videos("nope").is_empty());
    }

    #[test]
    fn test_json_export_uses_camel_case() {
        let store = ContentStore::new();
        let json = ContentStore::to_json(store.articles()).unwrap();
        assert!(json.contains("\"readTime\""));
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"createdAt\""));
        let thoughts = ContentStore::to_json(store.thoughts()).unwrap();
        assert!(thoughts.contains("\"authorName\""));
    }
}
