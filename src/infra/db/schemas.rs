//! Collection schema validators.
//!
//! These documents are installed as `$jsonSchema` validators at collection
//! creation and are the authoritative enforcement point for the username,
//! title and content constraints. The core never re-implements them; it
//! translates the server's structured rejection into a validation error.

use bson::{doc, Document};

use crate::config::{
    CONTENT_MAX_LENGTH, CONTENT_MIN_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH, TITLE_PATTERN,
    USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH, USERNAME_PATTERN,
};

fn username_property() -> Document {
    doc! {
        "bsonType": "string",
        "minLength": USERNAME_MIN_LENGTH,
        "maxLength": USERNAME_MAX_LENGTH,
        "pattern": USERNAME_PATTERN,
    }
}

/// Validator for the `users` collection.
pub fn user_schema() -> Document {
    doc! {
        "required": ["username", "passwordHash", "created", "following", "posts"],
        "properties": {
            "username": username_property(),
            "passwordHash": { "bsonType": "string" },
            "created": { "bsonType": "date" },
            "following": {
                "bsonType": "array",
                "items": { "bsonType": "string" },
            },
            "posts": {
                "bsonType": "array",
                "items": { "bsonType": "objectId" },
            },
        },
    }
}

/// Validator for the `posts` collection.
pub fn post_schema() -> Document {
    doc! {
        "required": ["author", "created", "title", "content"],
        "properties": {
            "author": username_property(),
            "created": { "bsonType": "date" },
            "title": {
                "bsonType": "string",
                "minLength": TITLE_MIN_LENGTH,
                "maxLength": TITLE_MAX_LENGTH,
                "pattern": TITLE_PATTERN,
            },
            "content": {
                "bsonType": "string",
                "minLength": CONTENT_MIN_LENGTH,
                "maxLength": CONTENT_MAX_LENGTH,
            },
        },
    }
}
