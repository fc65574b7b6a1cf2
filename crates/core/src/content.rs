//! Content-item approval status and input validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";

/// All valid approval status strings.
pub const VALID_APPROVAL_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED];

/// Maximum length accepted for a content item title.
pub const MAX_TITLE_LENGTH: usize = 200;
/// Maximum length accepted for a category/folder name.
pub const MAX_CATEGORY_LENGTH: usize = 64;

/// Approval status of a content item.
///
/// The transition is one-way: items start `pending` and staff may approve
/// them. There is no reject/return-to-pending transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
}

impl ApprovalStatus {
    /// Parse a database status string.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_APPROVED => Ok(Self::Approved),
            _ => Err(CoreError::Validation(format!(
                "Invalid approval status '{s}'. Must be one of: {}",
                VALID_APPROVAL_STATUSES.join(", ")
            ))),
        }
    }

    /// The database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Approved => STATUS_APPROVED,
        }
    }
}

/// Validate a content title before any I/O happens.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Title is required".to_string()));
    }
    if trimmed.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a category/folder name: non-empty, bounded, lowercase slug.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Category is required".to_string()));
    }
    if trimmed.len() > MAX_CATEGORY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Category must be at most {MAX_CATEGORY_LENGTH} characters"
        )));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        return Err(CoreError::Validation(
            "Category must be a lowercase slug (a-z, 0-9, '_', '-')".to_string(),
        ));
    }
    Ok(())
}
