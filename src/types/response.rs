//! Tagged response unions.
//!
//! Every operation answers HTTP 200 with one of these unions; the
//! `__typename` discriminator makes success and failure statically
//! distinguishable response shapes instead of an implicit transport error.

use serde::Serialize;

use crate::domain::{PostDetail, PostView, UserView};
use crate::errors::{AppResult, ErrorBody};
use crate::services::TokenResponse;

/// Message payload for mutations that only acknowledge.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// Post list payload.
#[derive(Debug, Serialize)]
pub struct PostList {
    pub posts: Vec<PostView>,
}

/// Union returned by user queries and registration.
#[derive(Debug, Serialize)]
#[serde(tag = "__typename")]
pub enum UserResult {
    User(UserView),
    Error(ErrorBody),
}

/// Union returned by login.
#[derive(Debug, Serialize)]
#[serde(tag = "__typename")]
pub enum TokenResult {
    Token(TokenResponse),
    Error(ErrorBody),
}

/// Union returned by follow/unfollow.
#[derive(Debug, Serialize)]
#[serde(tag = "__typename")]
pub enum MessageResult {
    Message(Message),
    Error(ErrorBody),
}

/// Union returned by post creation.
#[derive(Debug, Serialize)]
#[serde(tag = "__typename")]
pub enum PostResult {
    Post(PostView),
    Error(ErrorBody),
}

/// Union returned by single-post lookup (author expanded).
#[derive(Debug, Serialize)]
#[serde(tag = "__typename")]
pub enum PostDetailResult {
    Post(PostDetail),
    Error(ErrorBody),
}

/// Union returned by posts-by-author queries.
#[derive(Debug, Serialize)]
#[serde(tag = "__typename")]
pub enum PostListResult {
    PostList(PostList),
    Error(ErrorBody),
}

impl From<AppResult<UserView>> for UserResult {
    fn from(result: AppResult<UserView>) -> Self {
        match result {
            Ok(user) => UserResult::User(user),
            Err(e) => UserResult::Error(e.into_body()),
        }
    }
}

impl From<AppResult<TokenResponse>> for TokenResult {
    fn from(result: AppResult<TokenResponse>) -> Self {
        match result {
            Ok(token) => TokenResult::Token(token),
            Err(e) => TokenResult::Error(e.into_body()),
        }
    }
}

impl From<AppResult<String>> for MessageResult {
    fn from(result: AppResult<String>) -> Self {
        match result {
            Ok(message) => MessageResult::Message(Message { message }),
            Err(e) => MessageResult::Error(e.into_body()),
        }
    }
}

impl From<AppResult<PostView>> for PostResult {
    fn from(result: AppResult<PostView>) -> Self {
        match result {
            Ok(post) => PostResult::Post(post),
            Err(e) => PostResult::Error(e.into_body()),
        }
    }
}

impl From<AppResult<PostDetail>> for PostDetailResult {
    fn from(result: AppResult<PostDetail>) -> Self {
        match result {
            Ok(post) => PostDetailResult::Post(post),
            Err(e) => PostDetailResult::Error(e.into_body()),
        }
    }
}

impl From<AppResult<Vec<PostView>>> for PostListResult {
    fn from(result: AppResult<Vec<PostView>>) -> Self {
        match result {
            Ok(posts) => PostListResult::PostList(PostList { posts }),
            Err(e) => PostListResult::Error(e.into_body()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn success_and_error_members_are_tagged() {
        let result: MessageResult = Ok("Successfully followed user".to_string()).into();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["__typename"], "Message");
        assert_eq!(json["message"], "Successfully followed user");

        let result: MessageResult = Err(AppError::duplicate("User")).into();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["__typename"], "Error");
        assert_eq!(json["code"], "DUPLICATE_KEY");
        assert_eq!(json["message"], "User already exists");
    }
}
