//! Request form schemas with explicit validation.
//!
//! Each form enumerates exactly the fields a client may submit; server-owned
//! fields (author, creation time) have no representation here and cannot be
//! supplied. Validation is an explicit function per form returning the full
//! list of field-level messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_TITLE_LEN: usize = 256;
const MAX_USERNAME_LEN: usize = 150;
const MAX_NAME_LEN: usize = 150;
const MAX_EMAIL_LEN: usize = 254;
const MIN_PASSWORD_LEN: usize = 8;

fn require(errors: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{field}: this field is required"));
    }
}

fn max_len(errors: &mut Vec<String>, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(format!("{field}: must be at most {max} characters"));
    }
}

fn valid_username(errors: &mut Vec<String>, username: &str) {
    require(errors, "username", username);
    max_len(errors, "username", username, MAX_USERNAME_LEN);
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '@' | '+' | '-'))
    {
        errors.push("username: letters, digits and @/./+/-/_ only".to_string());
    }
}

fn valid_email(errors: &mut Vec<String>, email: &str) {
    require(errors, "email", email);
    max_len(errors, "email", email, MAX_EMAIL_LEN);
    if !email.contains('@') {
        errors.push("email: enter a valid email address".to_string());
    }
}

fn default_published() -> bool {
    true
}

/// Fields a post's author may submit when creating or editing a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    #[serde(default = "default_published")]
    pub is_published: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub location_id: Option<Uuid>,
}

impl PostForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        require(&mut errors, "title", &self.title);
        max_len(&mut errors, "title", &self.title, MAX_TITLE_LEN);
        require(&mut errors, "text", &self.text);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// The one editable comment field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentForm {
    pub text: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        require(&mut errors, "text", &self.text);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Profile fields a user may edit about themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileForm {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        valid_username(&mut errors, &self.username);
        max_len(&mut errors, "first_name", &self.first_name, MAX_NAME_LEN);
        max_len(&mut errors, "last_name", &self.last_name, MAX_NAME_LEN);
        valid_email(&mut errors, &self.email);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Registration form: profile fields plus a password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        valid_username(&mut errors, &self.username);
        max_len(&mut errors, "first_name", &self.first_name, MAX_NAME_LEN);
        max_len(&mut errors, "last_name", &self.last_name, MAX_NAME_LEN);
        valid_email(&mut errors, &self.email);
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "password: must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        require(&mut errors, "username", &self.username);
        require(&mut errors, "password", &self.password);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
