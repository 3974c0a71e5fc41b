//! Partial theme edits.
//!
//! The studio edits one control at a time, so updates arrive as sparse
//! JSON fragments. [`ThemePatch`] merges those fragments into an
//! existing theme one group-level deep (an edit to `colors.primary`
//! must not clobber the other 28 color roles) and re-validates the
//! result through the typed model.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::theme::model::OperatorTheme;

/// A sparse edit to an [`OperatorTheme`].
///
/// Group fields hold raw JSON objects whose keys are merged over the
/// matching group; identity fields replace wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePatch {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub colors: Option<Map<String, Value>>,
    pub typography: Option<Map<String, Value>>,
    pub layout: Option<Map<String, Value>>,
    pub components: Option<Map<String, Value>>,
    pub navigation: Option<Value>,
}

impl ThemePatch {
    /// Whether the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.logo_url.is_none()
            && self.banner_url.is_none()
            && self.colors.is_none()
            && self.typography.is_none()
            && self.layout.is_none()
            && self.components.is_none()
            && self.navigation.is_none()
    }

    /// Apply the patch to a theme, producing a new validated theme.
    ///
    /// Unknown keys and type mismatches inside a group surface as
    /// `CoreError::Validation` when the merged document fails to
    /// deserialize back into the typed model.
    pub fn apply(&self, theme: &OperatorTheme) -> Result<OperatorTheme, CoreError> {
        let mut doc = serde_json::to_value(theme)
            .map_err(|e| CoreError::Internal(format!("Failed to serialize theme: {e}")))?;

        let root = doc
            .as_object_mut()
            .ok_or_else(|| CoreError::Internal("Theme did not serialize to an object".into()))?;

        if let Some(name) = &self.name {
            root.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(logo) = &self.logo_url {
            root.insert("logoUrl".to_string(), Value::String(logo.clone()));
        }
        if let Some(banner) = &self.banner_url {
            root.insert("bannerUrl".to_string(), Value::String(banner.clone()));
        }

        merge_group(root, "colors", &self.colors);
        merge_group(root, "typography", &self.typography);
        merge_group(root, "layout", &self.layout);
        merge_group(root, "components", &self.components);

        if let Some(navigation) = &self.navigation {
            root.insert("navigation".to_string(), navigation.clone());
        }

        let merged: OperatorTheme = serde_json::from_value(doc)
            .map_err(|e| CoreError::Validation(format!("Invalid theme patch: {e}")))?;
        merged.validate()?;
        Ok(merged)
    }
}

/// Merge `patch` keys into `root[group]`, one level deep.
fn merge_group(root: &mut Map<String, Value>, group: &str, patch: &Option<Map<String, Value>>) {
    let Some(patch) = patch else {
        return;
    };

    let target = root
        .entry(group.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    if let Some(target) = target.as_object_mut() {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::synthesize;
    use serde_json::json;

    fn patch(value: Value) -> ThemePatch {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn color_patch_merges_one_level_deep() {
        let theme = synthesize::default_theme();
        let patched = patch(json!({"colors": {"primary": "#c8102e"}}))
            .apply(&theme)
            .unwrap();

        assert_eq!(patched.colors.primary, "#c8102e");
        // Untouched roles survive.
        assert_eq!(patched.colors.background, theme.colors.background);
        assert_eq!(patched.colors.header_bg, theme.colors.header_bg);
    }

    #[test]
    fn layout_enum_patch_round_trips() {
        let theme = synthesize::default_theme();
        let patched = patch(json!({"layout": {"spacing": "spacious", "sidebarPosition": "right"}}))
            .apply(&theme)
            .unwrap();

        assert_eq!(
            patched.layout.spacing,
            crate::theme::model::SpacingDensity::Spacious
        );
        assert_eq!(
            patched.layout.sidebar_position,
            crate::theme::model::SidebarPosition::Right
        );
    }

    #[test]
    fn invalid_enum_value_is_rejected() {
        let theme = synthesize::default_theme();
        let err = patch(json!({"layout": {"spacing": "enormous"}}))
            .apply(&theme)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid theme patch"));
    }

    #[test]
    fn invalid_color_value_is_rejected() {
        let theme = synthesize::default_theme();
        let err = patch(json!({"colors": {"primary": "red"}}))
            .apply(&theme)
            .unwrap_err();
        assert!(err.to_string().contains("primary"));
    }

    #[test]
    fn identity_fields_replace() {
        let theme = synthesize::default_theme();
        let patched = patch(json!({"name": "Night Mode", "logoUrl": "https://cdn.example/logo.svg"}))
            .apply(&theme)
            .unwrap();
        assert_eq!(patched.name, "Night Mode");
        assert_eq!(patched.logo_url.as_deref(), Some("https://cdn.example/logo.svg"));
    }

    #[test]
    fn empty_patch_is_identity() {
        let theme = synthesize::default_theme();
        let p = ThemePatch::default();
        assert!(p.is_empty());
        assert_eq!(p.apply(&theme).unwrap(), theme);
    }

    #[test]
    fn navigation_patch_sets_whole_group() {
        let theme = synthesize::default_theme();
        let patched = patch(json!({
            "navigation": {
                "style": "tabs",
                "menuItems": [{"id": "sports", "label": "Sports"}]
            }
        }))
        .apply(&theme)
        .unwrap();

        let nav = patched.navigation.unwrap();
        assert_eq!(nav.style, crate::theme::model::NavStyle::Tabs);
        assert_eq!(nav.menu_items.len(), 1);
        assert_eq!(nav.menu_items[0].id, "sports");
    }
}
