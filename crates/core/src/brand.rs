//! Brand entity and its validation rules.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::theme::model::OperatorTheme;
use crate::types::{BrandId, Timestamp};

/// Maximum length for a brand display name.
pub const MAX_BRAND_NAME_LEN: usize = 100;

/// A white-label brand owned by an operator.
///
/// A brand owns exactly one theme at a time. Edits happen on a detached
/// copy (the store's active theme) and only land here on an explicit
/// save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    pub theme: OperatorTheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_extraction_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Brand {
    /// Create a brand with a fresh id, stamping the theme with the
    /// brand's identity.
    pub fn new(name: impl Into<String>, theme: OperatorTheme) -> Self {
        let name = name.into();
        let id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now();

        let mut theme = theme;
        theme.id = id.clone();
        theme.name = name.clone();

        Self {
            id,
            name,
            theme,
            website_url: None,
            last_extraction_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for creating a brand.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrand {
    pub name: String,
}

/// DTO for partially updating a brand.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateBrand {
    pub name: Option<String>,
    pub website_url: Option<String>,
    pub last_extraction_url: Option<String>,
    pub theme: Option<OperatorTheme>,
}

/// Validate a brand name: non-empty and within the length limit.
pub fn validate_brand_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Brand name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_BRAND_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Brand name too long: {} chars (max {MAX_BRAND_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}
