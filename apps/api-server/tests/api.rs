//! End-to-end API tests running the full actix application against the
//! in-memory repositories.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::{TimeDelta, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use api_server::handlers::configure_routes;
use api_server::middleware::RequestIdMiddleware;
use api_server::state::AppState;
use blogicum_core::domain::{Category, Comment, Post, User};
use blogicum_core::ports::{PasswordService, TokenService};
use blogicum_infra::auth::JwtConfig;
use blogicum_infra::{Argon2PasswordService, InMemoryRepository, JwtTokenService};

struct TestEnv {
    state: AppState,
    tokens: Arc<dyn TokenService>,
}

fn test_env() -> TestEnv {
    let repo = Arc::new(InMemoryRepository::new());
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
        secret: "test-secret".to_string(),
        expiration_hours: 1,
        issuer: "blogicum-test".to_string(),
    }));

    TestEnv {
        state: AppState::from_repository(repo),
        tokens,
    }
}

impl TestEnv {
    fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        App::new()
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(self.state.clone()))
            .app_data(web::Data::new(self.tokens.clone()))
            .app_data(web::Data::new(passwords))
            .configure(configure_routes)
    }

    async fn seed_user(&self, username: &str) -> User {
        let user = User::new(
            username.to_string(),
            format!("{username}@example.com"),
            "unusable-hash".to_string(),
        );
        self.state.users.save(user).await.unwrap()
    }

    async fn seed_post(&self, author_id: Uuid, title: &str) -> Post {
        let post = Post::new(
            author_id,
            title.to_string(),
            "Body text".to_string(),
            Utc::now() - TimeDelta::minutes(5),
        );
        self.state.posts.save(post).await.unwrap()
    }

    async fn seed_category(&self, slug: &str, is_published: bool) -> Category {
        let mut category = Category::new(
            format!("Category {slug}"),
            slug.to_string(),
            "About this category".to_string(),
        );
        category.is_published = is_published;
        self.state.categories.save(category).await.unwrap()
    }

    fn bearer(&self, user: &User) -> (header::HeaderName, String) {
        let token = self
            .tokens
            .generate_token(user.id, &user.username)
            .unwrap();
        (header::AUTHORIZATION, format!("Bearer {token}"))
    }
}

async fn read_json(res: ServiceResponse) -> Value {
    let body = test::read_body(res).await;
    serde_json::from_slice(&body).expect("json body")
}

fn location_of(res: &ServiceResponse) -> &str {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("Location header")
}

fn item_titles(page: &Value) -> Vec<String> {
    page["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn health_answers_with_request_id() {
    let env = test_env();
    let app = test::init_service(env.app()).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    let body = read_json(res).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn register_login_and_me_roundtrip() {
    let env = test_env();
    let app = test::init_service(env.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "username": "natasha",
                "first_name": "Natasha",
                "last_name": "Rostova",
                "email": "natasha@example.com",
                "password": "correct horse battery"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    let token = body["access_token"].as_str().expect("token").to_string();
    assert_eq!(body["token_type"], "Bearer");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["username"], "natasha");

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({
                "username": "natasha",
                "password": "correct horse battery"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({
                "username": "natasha",
                "password": "wrong password"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn register_rejects_taken_username() {
    let env = test_env();
    env.seed_user("taken").await;
    let app = test::init_service(env.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "username": "taken",
                "first_name": "",
                "last_name": "",
                "email": "other@example.com",
                "password": "some password"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn index_lists_only_visible_posts_newest_first() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let hidden_cat = env.seed_category("closed", false).await;
    let open_cat = env.seed_category("open", true).await;

    let older = env.seed_post(author.id, "Older visible").await;
    let mut newer = env.seed_post(author.id, "Newer visible").await;
    newer.pub_date = older.pub_date + TimeDelta::minutes(1);
    newer.category_id = Some(open_cat.id);
    env.state.posts.save(newer).await.unwrap();

    let mut draft = env.seed_post(author.id, "Draft").await;
    draft.is_published = false;
    env.state.posts.save(draft).await.unwrap();

    let mut scheduled = env.seed_post(author.id, "Scheduled").await;
    scheduled.pub_date = Utc::now() + TimeDelta::days(1);
    env.state.posts.save(scheduled).await.unwrap();

    let mut in_hidden = env.seed_post(author.id, "In hidden category").await;
    in_hidden.category_id = Some(hidden_cat.id);
    env.state.posts.save(in_hidden).await.unwrap();

    let app = test::init_service(env.app()).await;
    let res =
        test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let page = read_json(res).await;
    assert_eq!(
        item_titles(&page),
        vec!["Newer visible".to_string(), "Older visible".to_string()]
    );
    assert_eq!(page["total_items"], 2);
}

#[actix_web::test]
async fn hidden_post_detail_is_404_for_everyone_but_the_author() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let reader = env.seed_user("reader").await;

    let mut draft = env.seed_post(author.id, "Draft").await;
    draft.is_published = false;
    let draft = env.state.posts.save(draft).await.unwrap();
    let uri = format!("/api/posts/{}", draft.id);

    let app = test::init_service(env.app()).await;

    let res = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&uri)
            .insert_header(env.bearer(&reader))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&uri)
            .insert_header(env.bearer(&author))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["post"]["title"], "Draft");
}

#[actix_web::test]
async fn scheduled_post_is_author_only_until_its_date() {
    let env = test_env();
    let author = env.seed_user("author").await;

    let mut post = env.seed_post(author.id, "From the future").await;
    post.pub_date = Utc::now() + TimeDelta::hours(2);
    let post = env.state.posts.save(post).await.unwrap();
    let uri = format!("/api/posts/{}", post.id);

    let app = test::init_service(env.app()).await;

    let res = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&uri)
            .insert_header(env.bearer(&author))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn creating_a_post_assigns_the_acting_user_as_author() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let victim = env.seed_user("victim").await;

    let app = test::init_service(env.app()).await;

    // An author_id in the body must be ignored; the form has no such field.
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(env.bearer(&author))
            .set_json(json!({
                "title": "Mine",
                "text": "Body",
                "pub_date": Utc::now(),
                "author_id": victim.id
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&res), "/api/profile/author");

    let posts = env.state.posts.list_by_author(author.id).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author_id, author.id);
    assert!(env
        .state
        .posts
        .list_by_author(victim.id)
        .await
        .unwrap()
        .is_empty());
}

#[actix_web::test]
async fn create_rejects_unknown_category() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let app = test::init_service(env.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(env.bearer(&author))
            .set_json(json!({
                "title": "Tagged",
                "text": "Body",
                "pub_date": Utc::now(),
                "category_id": Uuid::new_v4()
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert!(body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e.as_str().unwrap().contains("category_id")));
}

#[actix_web::test]
async fn editing_someone_elses_post_redirects_without_saving() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let intruder = env.seed_user("intruder").await;
    let post = env.seed_post(author.id, "Original title").await;

    let app = test::init_service(env.app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/posts/{}", post.id))
            .insert_header(env.bearer(&intruder))
            .set_json(json!({
                "title": "Hijacked",
                "text": "Changed",
                "pub_date": Utc::now()
            }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&res), format!("/api/posts/{}", post.id));

    let unchanged = env
        .state
        .posts
        .list_by_author(author.id)
        .await
        .unwrap()
        .remove(0);
    assert_eq!(unchanged.title, "Original title");
}

#[actix_web::test]
async fn author_can_edit_own_post() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let post = env.seed_post(author.id, "Before").await;

    let app = test::init_service(env.app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/posts/{}", post.id))
            .insert_header(env.bearer(&author))
            .set_json(json!({
                "title": "After",
                "text": "Edited body",
                "pub_date": post.pub_date
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let saved = env
        .state
        .posts
        .list_by_author(author.id)
        .await
        .unwrap()
        .remove(0);
    assert_eq!(saved.title, "After");
    assert_eq!(saved.author_id, author.id);
    assert_eq!(saved.created_at, post.created_at);
}

#[actix_web::test]
async fn deleting_is_author_only() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let intruder = env.seed_user("intruder").await;
    let post = env.seed_post(author.id, "Keep me").await;
    let uri = format!("/api/posts/{}", post.id);

    let app = test::init_service(env.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header(env.bearer(&intruder))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&res), uri);
    assert_eq!(env.state.posts.list_by_author(author.id).await.unwrap().len(), 1);

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header(env.bearer(&author))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&res), "/api/posts");
    assert!(env.state.posts.list_by_author(author.id).await.unwrap().is_empty());
}

#[actix_web::test]
async fn comments_come_back_oldest_first() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let post = env.seed_post(author.id, "Discussed").await;

    let base = Utc::now();
    for (text, offset) in [("second", 1), ("third", 2), ("first", 0)] {
        let mut comment = Comment::new(post.id, author.id, text.to_string());
        comment.created_at = base + TimeDelta::seconds(offset);
        env.state.comments.save(comment).await.unwrap();
    }

    let app = test::init_service(env.app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}", post.id))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    let texts: Vec<&str> = body["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[actix_web::test]
async fn commenting_redirects_to_the_post() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let reader = env.seed_user("reader").await;
    let post = env.seed_post(author.id, "Open thread").await;

    let app = test::init_service(env.app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/posts/{}/comments", post.id))
            .insert_header(env.bearer(&reader))
            .set_json(json!({"text": "Nice one"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&res), format!("/api/posts/{}", post.id));

    let comments = env.state.comments.list_by_post(post.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author_id, reader.id);
}

#[actix_web::test]
async fn commenting_on_a_missing_post_is_404() {
    let env = test_env();
    let reader = env.seed_user("reader").await;

    let app = test::init_service(env.app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/posts/{}/comments", Uuid::new_v4()))
            .insert_header(env.bearer(&reader))
            .set_json(json!({"text": "Into the void"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn editing_someone_elses_comment_redirects_without_saving() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let intruder = env.seed_user("intruder").await;
    let post = env.seed_post(author.id, "Discussed").await;
    let comment = env
        .state
        .comments
        .save(Comment::new(post.id, author.id, "original".to_string()))
        .await
        .unwrap();

    let app = test::init_service(env.app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/posts/{}/comments/{}", post.id, comment.id))
            .insert_header(env.bearer(&intruder))
            .set_json(json!({"text": "defaced"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&res), format!("/api/posts/{}", post.id));

    let comments = env.state.comments.list_by_post(post.id).await.unwrap();
    assert_eq!(comments[0].text, "original");
}

#[actix_web::test]
async fn comment_under_the_wrong_post_is_404() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let post = env.seed_post(author.id, "One").await;
    let other = env.seed_post(author.id, "Two").await;
    let comment = env
        .state
        .comments
        .save(Comment::new(post.id, author.id, "hello".to_string()))
        .await
        .unwrap();

    let app = test::init_service(env.app()).await;
    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/posts/{}/comments/{}", other.id, comment.id))
            .insert_header(env.bearer(&author))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn listing_clamps_out_of_range_pages() {
    let env = test_env();
    let author = env.seed_user("author").await;
    for i in 0..23 {
        let mut post = env.seed_post(author.id, &format!("Post {i}")).await;
        post.pub_date = Utc::now() - TimeDelta::minutes(30 + i);
        env.state.posts.save(post).await.unwrap();
    }

    let app = test::init_service(env.app()).await;

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request()).await;
    let page = read_json(res).await;
    assert_eq!(page["page"], 1);
    assert_eq!(page["total_pages"], 3);
    assert_eq!(page["items"].as_array().unwrap().len(), 10);
    assert_eq!(page["has_next"], true);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/posts?page=99").to_request(),
    )
    .await;
    let page = read_json(res).await;
    assert_eq!(page["page"], 3);
    assert_eq!(page["items"].as_array().unwrap().len(), 3);
    assert_eq!(page["has_next"], false);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/posts?page=0").to_request(),
    )
    .await;
    let page = read_json(res).await;
    assert_eq!(page["page"], 1);
}

#[actix_web::test]
async fn category_listing_404s_unless_published() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let hidden = env.seed_category("hidden", false).await;
    let open = env.seed_category("travel", true).await;

    let mut tagged = env.seed_post(author.id, "Tagged").await;
    tagged.category_id = Some(open.id);
    env.state.posts.save(tagged).await.unwrap();
    env.seed_post(author.id, "Untagged").await;
    let mut in_hidden = env.seed_post(author.id, "Hidden tag").await;
    in_hidden.category_id = Some(hidden.id);
    env.state.posts.save(in_hidden).await.unwrap();

    let app = test::init_service(env.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/categories/missing/posts").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/categories/hidden/posts").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/categories/travel/posts").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["category"]["slug"], "travel");
    assert_eq!(item_titles(&body["posts"]), vec!["Tagged".to_string()]);
}

#[actix_web::test]
async fn profile_shows_hidden_posts_to_the_owner_only() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let reader = env.seed_user("reader").await;

    env.seed_post(author.id, "Public").await;
    let mut draft = env.seed_post(author.id, "Draft").await;
    draft.is_published = false;
    env.state.posts.save(draft).await.unwrap();

    let app = test::init_service(env.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/profile/author").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(item_titles(&body["posts"]), vec!["Public".to_string()]);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/profile/author")
            .insert_header(env.bearer(&reader))
            .to_request(),
    )
    .await;
    let body = read_json(res).await;
    assert_eq!(body["posts"]["total_items"], 1);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/profile/author")
            .insert_header(env.bearer(&author))
            .to_request(),
    )
    .await;
    let body = read_json(res).await;
    assert_eq!(body["posts"]["total_items"], 2);
}

#[actix_web::test]
async fn profile_edit_renames_and_redirects() {
    let env = test_env();
    let user = env.seed_user("oldname").await;
    env.seed_user("occupied").await;

    let app = test::init_service(env.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/profile")
            .insert_header(env.bearer(&user))
            .set_json(json!({
                "username": "occupied",
                "first_name": "A",
                "last_name": "B",
                "email": "oldname@example.com"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/profile")
            .insert_header(env.bearer(&user))
            .set_json(json!({
                "username": "newname",
                "first_name": "A",
                "last_name": "B",
                "email": "oldname@example.com"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&res), "/api/profile/newname");

    assert!(env.state.users.find_by_username("newname").await.unwrap().is_some());
    assert!(env.state.users.find_by_username("oldname").await.unwrap().is_none());
}

#[actix_web::test]
async fn mutations_require_authentication() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let post = env.seed_post(author.id, "Post").await;

    let app = test::init_service(env.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "x", "text": "y", "pub_date": Utc::now()}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/posts/{}", post.id))
            .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn post_validation_failures_are_reported_together() {
    let env = test_env();
    let author = env.seed_user("author").await;
    let app = test::init_service(env.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(env.bearer(&author))
            .set_json(json!({
                "title": "",
                "text": "",
                "pub_date": Utc::now()
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = read_json(res).await;
    assert_eq!(body["status"], 400);
    assert!(body["errors"].as_array().unwrap().len() >= 2);
}
