//! The built-in content set.
//!
//! All records are constant, in-process data; the store never mutates
//! them after construction.

use chrono::{DateTime, TimeZone, Utc};

use crate::records::{Article, Course, Thought, Video};

const AUTHOR_NAME: &str = "Aman Bhardwaj";
const AUTHOR_IMAGE: &str = "https://i.ibb.co/rGqGDYNF/portrait.jpg";

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".into(),
            title: "Building Neural Networks with TensorFlow: A Complete Guide".into(),
            excerpt: "Explore the fundamentals of neural network architecture and learn \
                      how to implement powerful AI models using TensorFlow and modern \
                      best practices."
                .into(),
            content: "# Building Neural Networks with TensorFlow\n\n\
                      Neural networks are computational models inspired by biological \
                      brains. They consist of interconnected nodes that process and \
                      transmit information.\n\n\
                      ## Getting Started\n\n\
                      TensorFlow provides a comprehensive ecosystem for building and \
                      deploying machine learning models.\n\n\
                      ```python\npip install tensorflow\n```\n\n\
                      ## Best Practices\n\n\
                      1. Normalize your data\n\
                      2. Use dropout and batch normalization\n\
                      3. Implement early stopping and checkpoints\n\n\
                      Experiment, iterate, and keep learning!"
                .into(),
            category: "AI Development".into(),
            read_time: "5 min read".into(),
            image_url: "https://images.unsplash.com/photo-1581291518857-4e27b48ff24e".into(),
            likes: 127,
            comments: 23,
            created_at: date(2025, 8, 20),
        },
        Article {
            id: "2".into(),
            title: "Modern React Patterns: From Hooks to Server Components".into(),
            excerpt: "Discover the evolution of React development patterns and learn how \
                      to leverage the latest features for building performant applications."
                .into(),
            content: "# Modern React Patterns\n\n\
                      React has evolved significantly since its inception, introducing \
                      powerful patterns that have transformed how we build user \
                      interfaces.\n\n\
                      ## Hooks\n\n\
                      Hooks let function components hold state and effects without \
                      classes.\n\n\
                      ## Server Components\n\n\
                      Server components move rendering work off the client, shrinking \
                      bundles and speeding up first paint."
                .into(),
            category: "Web Development".into(),
            read_time: "8 min read".into(),
            image_url: "https://images.unsplash.com/photo-1633356122544-f134324a6cee".into(),
            likes: 89,
            comments: 15,
            created_at: date(2025, 8, 15),
        },
        Article {
            id: "3".into(),
            title: "The Art of Clean Code: Principles Every Developer Should Know".into(),
            excerpt: "Learn the essential principles of writing maintainable, readable \
                      code that stands the test of time."
                .into(),
            content: "# The Art of Clean Code\n\n\
                      Code is read far more often than it is written. Clean code is not \
                      about cleverness; it is about clarity.\n\n\
                      ## Naming\n\n\
                      Names should reveal intent. A variable named `elapsed_ms` needs no \
                      comment.\n\n\
                      ## Functions\n\n\
                      Small functions that do one thing compose better and test easier."
                .into(),
            category: "Software Engineering".into(),
            read_time: "6 min read".into(),
            image_url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c".into(),
            likes: 156,
            comments: 31,
            created_at: date(2025, 8, 10),
        },
    ]
}

pub fn thoughts() -> Vec<Thought> {
    vec![
        Thought {
            id: "1".into(),
            content: "Just shipped a new feature using AI-powered code generation. The \
                      future of development is here, and it's incredible how much faster \
                      we can iterate now."
                .into(),
            author_name: AUTHOR_NAME.into(),
            author_image: AUTHOR_IMAGE.into(),
            likes: 42,
            comments: 8,
            created_at: date(2025, 8, 24),
        },
        Thought {
            id: "2".into(),
            content: "Hot take: the best code review comment is a question, not a \
                      correction. Asking why invites a conversation; demanding a change \
                      ends one."
                .into(),
            author_name: AUTHOR_NAME.into(),
            author_image: AUTHOR_IMAGE.into(),
            likes: 67,
            comments: 12,
            created_at: date(2025, 8, 22),
        },
    ]
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".into(),
            title: "Full-Stack Web Development Bootcamp".into(),
            description: "From HTML basics to deploying production applications.".into(),
            thumbnail_url: "https://images.unsplash.com/photo-1498050108023-c5249f4df085".into(),
            category: "Web Development".into(),
            total_duration: "12h 30m".into(),
            total_videos: 3,
            views: 15_420,
            featured: true,
            created_at: date(2025, 7, 1),
        },
        Course {
            id: "2".into(),
            title: "Machine Learning Fundamentals".into(),
            description: "A practical introduction to supervised and unsupervised learning.".into(),
            thumbnail_url: "https://images.unsplash.com/photo-1555949963-aa79dcee981c".into(),
            category: "AI Development".into(),
            total_duration: "8h 45m".into(),
            total_videos: 2,
            views: 9_812,
            featured: false,
            created_at: date(2025, 7, 15),
        },
    ]
}

pub fn videos() -> Vec<Video> {
    vec![
        Video {
            id: "1".into(),
            course_id: "1".into(),
            title: "HTML & CSS Foundations".into(),
            description: "Structure and style your first page.".into(),
            thumbnail_url: "https://images.unsplash.com/photo-1498050108023-c5249f4df085".into(),
            video_url: None,
            duration: "42:10".into(),
            order_index: 1,
            views: 8_204,
            created_at: date(2025, 7, 1),
        },
        Video {
            id: "2".into(),
            course_id: "1".into(),
            title: "JavaScript Essentials".into(),
            description: "The language of the web, from values to closures.".into(),
            thumbnail_url: "https://images.unsplash.com/photo-1627398242454-45a1465c2479".into(),
            video_url: None,
            duration: "58:33".into(),
            order_index: 2,
            views: 7_119,
            created_at: date(2025, 7, 2),
        },
        Video {
            id: "3".into(),
            course_id: "1".into(),
            title: "Deploying to Production".into(),
            description: "Ship it: builds, environments, and monitoring.".into(),
            thumbnail_url: "https://images.unsplash.com/photo-1667372393119-3d4c48d07fc9".into(),
            video_url: None,
            duration: "36:05".into(),
            order_index: 3,
            views: 5_488,
            created_at: date(2025, 7, 3),
        },
        Video {
            id: "4".into(),
            course_id: "2".into(),
            title: "Linear Regression from Scratch".into(),
            description: "Fit a line, understand the loss.".into(),
            thumbnail_url: "https://images.unsplash.com/photo-1555949963-aa79dcee981c".into(),
            video_url: None,
            duration: "49:27".into(),
            order_index: 1,
            views: 6_030,
            created_at: date(2025, 7, 15),
        },
        Video {
            id: "5".into(),
            course_id: "2".into(),
            title: "Clustering and Dimensionality Reduction".into(),
            description: "Finding structure without labels.".into(),
            thumbnail_url: "https://images.unsplash.com/photo-1527474305487-b87b222841cc".into(),
            video_url: None,
            duration: "53:41".into(),
            order_index: 2,
            views: 4_782,
            created_at: date(2025, 7, 16),
        },
    ]
}
