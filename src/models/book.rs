//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Year the book was published
    pub published_year: Option<i32>,
    /// Genre of the book
    pub genre: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

/// Update book request. A full replacement: the same constraints apply as on
/// creation, and every mutable field takes the submitted value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

impl CreateBook {
    pub fn validate(&self) -> AppResult<()> {
        validate_book_fields(&self.title, &self.author, self.published_year)
    }
}

impl UpdateBook {
    pub fn validate(&self) -> AppResult<()> {
        validate_book_fields(&self.title, &self.author, self.published_year)
    }
}

/// Check the field constraints shared by create and update payloads.
/// Every violated constraint is reported, in one message naming each field.
fn validate_book_fields(
    title: &str,
    author: &str,
    published_year: Option<i32>,
) -> AppResult<()> {
    let mut violations = Vec::new();

    if title.trim().is_empty() {
        violations.push("title must not be empty");
    }
    if author.trim().is_empty() {
        violations.push("author must not be empty");
    }
    if let Some(year) = published_year {
        if year < 0 {
            violations.push("published_year must not be negative");
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(violations.join("; ")))
    }
}
