//! In-memory repositories - used for tests and database-less operation.
//!
//! A single store implements every repository port over `HashMap`s behind
//! async locks. Data is lost on process restart. The listing methods apply
//! the same visibility predicate and ordering the Postgres queries express
//! in SQL, via the pure helpers in `blogicum_core::visibility`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use blogicum_core::domain::{Category, Comment, Location, Post, User};
use blogicum_core::error::RepoError;
use blogicum_core::ports::{
    BaseRepository, CategoryRepository, CommentRepository, LocationRepository, PostRepository,
    UserRepository,
};
use blogicum_core::visibility;

/// In-memory store backing every repository port.
#[derive(Default)]
pub struct InMemoryRepository {
    users: RwLock<HashMap<Uuid, User>>,
    categories: RwLock<HashMap<Uuid, Category>>,
    locations: RwLock<HashMap<Uuid, Location>>,
    posts: RwLock<HashMap<Uuid, Post>>,
    comments: RwLock<HashMap<Uuid, Comment>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn published_category_ids(&self) -> HashMap<Uuid, bool> {
        self.categories
            .read()
            .await
            .iter()
            .map(|(id, category)| (*id, category.is_published))
            .collect()
    }

    async fn visible_posts(&self, posts: Vec<Post>, now: DateTime<Utc>) -> Vec<Post> {
        let categories = self.published_category_ids().await;
        visibility::visible_posts(posts, false, now, |id| {
            categories.get(&id).copied().unwrap_or(false)
        })
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;
        let taken = users
            .values()
            .any(|u| u.username == user.username && u.id != user.id);
        if taken {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        if self.users.write().await.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[async_trait]
impl BaseRepository<Category, Uuid> for InMemoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
        Ok(self.categories.read().await.get(&id).cloned())
    }

    async fn save(&self, category: Category) -> Result<Category, RepoError> {
        self.categories
            .write()
            .await
            .insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        if self.categories.write().await.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryRepository {
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        Ok(self
            .categories
            .read()
            .await
            .values()
            .find(|c| c.slug == slug && c.is_published)
            .cloned())
    }
}

#[async_trait]
impl BaseRepository<Location, Uuid> for InMemoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>, RepoError> {
        Ok(self.locations.read().await.get(&id).cloned())
    }

    async fn save(&self, location: Location) -> Result<Location, RepoError> {
        self.locations
            .write()
            .await
            .insert(location.id, location.clone());
        Ok(location)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        if self.locations.write().await.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl LocationRepository for InMemoryRepository {}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        if self.posts.write().await.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        // Comments cascade with their parent post.
        self.comments
            .write()
            .await
            .retain(|_, comment| comment.post_id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository {
    async fn find_published_by_id(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError> {
        let post = match self.posts.read().await.get(&id).cloned() {
            Some(post) => post,
            None => return Ok(None),
        };
        Ok(self.visible_posts(vec![post], now).await.into_iter().next())
    }

    async fn list_published(&self, now: DateTime<Utc>) -> Result<Vec<Post>, RepoError> {
        let posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        let mut posts = self.visible_posts(posts, now).await;
        visibility::sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn list_published_by_category(
        &self,
        category_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError> {
        let posts: Vec<Post> = self
            .posts
            .read()
            .await
            .values()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect();
        let mut posts = self.visible_posts(posts, now).await;
        visibility::sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self
            .posts
            .read()
            .await
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        visibility::sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn list_published_by_author(
        &self,
        author_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError> {
        let posts = self.list_by_author(author_id).await?;
        Ok(self.visible_posts(posts, now).await)
    }
}

#[async_trait]
impl BaseRepository<Comment, Uuid> for InMemoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        Ok(self.comments.read().await.get(&id).cloned())
    }

    async fn save(&self, comment: Comment) -> Result<Comment, RepoError> {
        self.comments
            .write()
            .await
            .insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        if self.comments.write().await.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryRepository {
    async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()
            .await
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(comments)
    }
}
