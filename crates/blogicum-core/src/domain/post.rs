use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog publication.
///
/// `author_id` and `created_at` are set once at creation and never change;
/// edit flows mutate the scalar fields in place. `pub_date` may lie in the
/// future to schedule publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub text: String,
    pub image_url: Option<String>,
    pub pub_date: DateTime<Utc>,
    pub is_published: bool,
    pub category_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `author_id`.
    ///
    /// Optional tags and the publish flag are assigned by the caller after
    /// construction; ownership and creation time are fixed here.
    pub fn new(author_id: Uuid, title: String, text: String, pub_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            text,
            image_url: None,
            pub_date,
            is_published: true,
            category_id: None,
            location_id: None,
            created_at: Utc::now(),
        }
    }

    /// Ownership guard: only the author may edit or delete the post.
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}
