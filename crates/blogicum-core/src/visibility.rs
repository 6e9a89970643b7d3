//! Publication visibility rules.
//!
//! A post is visible to the public only when it is published, its publish
//! date is not in the future, and its category (if any) is itself published.
//! Authors always see their own posts regardless of publish state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::Post;

/// Publication predicate for a single post.
///
/// `category_is_published` is the publish flag of the post's category, or
/// `None` when the post has no category (an untagged post is not hidden).
pub fn is_visible_to_public(
    post: &Post,
    category_is_published: Option<bool>,
    now: DateTime<Utc>,
) -> bool {
    post.is_published && post.pub_date <= now && category_is_published.unwrap_or(true)
}

/// Filter a materialized post listing for a viewer.
///
/// When the viewer is known to be the author of every post in scope (their
/// own profile), the listing passes through unfiltered. Otherwise each post
/// must satisfy [`is_visible_to_public`]; `category_is_published` resolves
/// the publish flag of a category by id.
pub fn visible_posts<F>(
    posts: Vec<Post>,
    viewer_is_author: bool,
    now: DateTime<Utc>,
    category_is_published: F,
) -> Vec<Post>
where
    F: Fn(Uuid) -> bool,
{
    if viewer_is_author {
        return posts;
    }

    posts
        .into_iter()
        .filter(|post| {
            let category = post.category_id.map(&category_is_published);
            is_visible_to_public(post, category, now)
        })
        .collect()
}

/// Canonical listing order: most recent publish date first, id as the
/// deterministic tie-break.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn post(is_published: bool, pub_date: DateTime<Utc>) -> Post {
        let mut post = Post::new(
            Uuid::new_v4(),
            "Title".to_owned(),
            "Text".to_owned(),
            pub_date,
        );
        post.is_published = is_published;
        post
    }

    #[test]
    fn published_past_post_is_visible() {
        let now = Utc::now();
        let post = post(true, now - TimeDelta::hours(1));
        assert!(is_visible_to_public(&post, None, now));
    }

    #[test]
    fn unpublished_post_is_hidden() {
        let now = Utc::now();
        let post = post(false, now - TimeDelta::hours(1));
        assert!(!is_visible_to_public(&post, None, now));
    }

    #[test]
    fn future_dated_post_is_hidden() {
        let now = Utc::now();
        let post = post(true, now + TimeDelta::hours(1));
        assert!(!is_visible_to_public(&post, None, now));
    }

    #[test]
    fn unpublished_category_hides_post() {
        let now = Utc::now();
        let mut post = post(true, now - TimeDelta::hours(1));
        post.category_id = Some(Uuid::new_v4());
        assert!(!is_visible_to_public(&post, Some(false), now));
        assert!(is_visible_to_public(&post, Some(true), now));
    }

    #[test]
    fn author_listing_is_unfiltered() {
        let now = Utc::now();
        let posts = vec![post(false, now), post(true, now + TimeDelta::days(1))];
        let visible = visible_posts(posts, true, now, |_| true);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn public_listing_drops_hidden_posts() {
        let now = Utc::now();
        let hidden_category = Uuid::new_v4();
        let mut tagged = post(true, now - TimeDelta::hours(1));
        tagged.category_id = Some(hidden_category);
        let posts = vec![
            post(true, now - TimeDelta::hours(2)),
            post(false, now - TimeDelta::hours(2)),
            post(true, now + TimeDelta::hours(2)),
            tagged,
        ];
        let visible = visible_posts(posts, false, now, |id| id != hidden_category);
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn ordering_is_newest_first() {
        let now = Utc::now();
        let old = post(true, now - TimeDelta::days(2));
        let new = post(true, now - TimeDelta::days(1));
        let mut posts = vec![old.clone(), new.clone()];
        sort_newest_first(&mut posts);
        assert_eq!(posts[0].id, new.id);
        assert_eq!(posts[1].id, old.id);
    }
}
