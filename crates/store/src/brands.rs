//! The brand store: owns all brands, the current selection, and the
//! detached active theme that edits happen on.
//!
//! Invariants:
//! - there is always at least one brand (deleting the last one is a
//!   conflict, not a no-op),
//! - the current selection always points at an existing brand,
//! - every change to the active theme is published on the bus before
//!   the call returns.

use std::sync::Arc;

use oddsmith_core::brand::{validate_brand_name, Brand, CreateBrand, UpdateBrand};
use oddsmith_core::theme::{synthesize, OperatorTheme, SimpleThemeColors, ThemePatch};
use oddsmith_core::types::BrandId;
use oddsmith_core::CoreError;
use oddsmith_events::{ThemeBus, ThemeEvent};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::kv::KvStore;

/// Document key the snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "brands";

/// Persisted shape of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    brands: Vec<Brand>,
    current_brand_id: BrandId,
    active_theme: OperatorTheme,
}

struct State {
    brands: Vec<Brand>,
    current_brand_id: BrandId,
    /// Detached working copy. Edits land here and propagate to previews
    /// immediately; they only reach the brand on an explicit save.
    active_theme: OperatorTheme,
}

impl State {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            brands: self.brands.clone(),
            current_brand_id: self.current_brand_id.clone(),
            active_theme: self.active_theme.clone(),
        }
    }
}

/// Single owner of brand and theme state. Shared as `Arc<BrandStore>`.
pub struct BrandStore {
    state: RwLock<State>,
    kv: KvStore,
    bus: Arc<ThemeBus>,
}

impl BrandStore {
    /// Open the store, rehydrating from disk or seeding fresh state.
    ///
    /// A corrupt snapshot is logged and replaced with seed data rather
    /// than refusing to start; this is demo infrastructure, losing a
    /// snapshot beats being down.
    pub async fn open(kv: KvStore, bus: Arc<ThemeBus>) -> Result<Self, StoreError> {
        let state = match kv.load::<Snapshot>(SNAPSHOT_KEY).await {
            Ok(Some(snapshot)) => {
                tracing::info!(brands = snapshot.brands.len(), "Rehydrated brand store");
                restore(snapshot)
            }
            Ok(None) => {
                tracing::info!("No brand snapshot found; seeding defaults");
                seed()
            }
            Err(StoreError::Corrupt(err)) => {
                tracing::warn!(error = %err, "Brand snapshot corrupt; reseeding");
                seed()
            }
            Err(err) => return Err(err),
        };

        let store = Self {
            state: RwLock::new(state),
            kv,
            bus,
        };
        store.persist().await?;
        Ok(store)
    }

    /* ---- reads ---- */

    pub async fn list_brands(&self) -> Vec<Brand> {
        self.state.read().await.brands.clone()
    }

    pub async fn get_brand(&self, id: &str) -> Result<Brand, StoreError> {
        let state = self.state.read().await;
        find_brand(&state.brands, id).cloned().ok_or_else(|| {
            StoreError::Core(CoreError::NotFound {
                entity: "brand",
                id: id.to_string(),
            })
        })
    }

    pub async fn current_brand(&self) -> Brand {
        let state = self.state.read().await;
        // The selection invariant guarantees this lookup succeeds.
        find_brand(&state.brands, &state.current_brand_id)
            .cloned()
            .unwrap_or_else(|| state.brands[0].clone())
    }

    pub async fn active_theme(&self) -> OperatorTheme {
        self.state.read().await.active_theme.clone()
    }

    /* ---- brand CRUD ---- */

    pub async fn create_brand(&self, request: CreateBrand) -> Result<Brand, StoreError> {
        validate_brand_name(&request.name).map_err(StoreError::Core)?;

        let brand = Brand::new(request.name, synthesize::default_theme());
        {
            let mut state = self.state.write().await;
            state.brands.push(brand.clone());
        }
        self.persist().await?;
        tracing::info!(brand_id = %brand.id, name = %brand.name, "Brand created");
        Ok(brand)
    }

    pub async fn update_brand(
        &self,
        id: &str,
        request: UpdateBrand,
    ) -> Result<Brand, StoreError> {
        if let Some(name) = &request.name {
            validate_brand_name(name).map_err(StoreError::Core)?;
        }
        if let Some(theme) = &request.theme {
            theme.validate().map_err(StoreError::Core)?;
        }

        let (updated, theme_changed_on_current) = {
            let mut state = self.state.write().await;
            let current_id = state.current_brand_id.clone();
            let brand = find_brand_mut(&mut state.brands, id).ok_or_else(|| {
                StoreError::Core(CoreError::NotFound {
                    entity: "brand",
                    id: id.to_string(),
                })
            })?;

            if let Some(name) = request.name {
                brand.name = name.clone();
                brand.theme.name = name;
            }
            if let Some(website_url) = request.website_url {
                brand.website_url = Some(website_url);
            }
            if let Some(last_extraction_url) = request.last_extraction_url {
                brand.last_extraction_url = Some(last_extraction_url);
            }
            let mut theme_replaced = false;
            if let Some(mut theme) = request.theme {
                theme.id = brand.id.clone();
                brand.theme = theme;
                theme_replaced = true;
            }
            brand.updated_at = chrono::Utc::now();

            let updated = brand.clone();
            let on_current = theme_replaced && updated.id == current_id;
            if on_current {
                state.active_theme = updated.theme.clone();
            }
            (updated, on_current)
        };

        self.persist().await?;
        if theme_changed_on_current {
            self.publish_active().await;
        }
        Ok(updated)
    }

    /// Delete a brand. The last remaining brand cannot be deleted.
    pub async fn delete_brand(&self, id: &str) -> Result<(), StoreError> {
        let reselected = {
            let mut state = self.state.write().await;
            if !state.brands.iter().any(|b| b.id == id) {
                return Err(StoreError::Core(CoreError::NotFound {
                    entity: "brand",
                    id: id.to_string(),
                }));
            }
            if state.brands.len() == 1 {
                return Err(StoreError::Core(CoreError::Conflict(
                    "Cannot delete the last remaining brand".to_string(),
                )));
            }

            state.brands.retain(|b| b.id != id);
            if state.current_brand_id == id {
                let fallback = state.brands[0].clone();
                state.current_brand_id = fallback.id.clone();
                state.active_theme = fallback.theme;
                true
            } else {
                false
            }
        };

        self.persist().await?;
        if reselected {
            self.publish_active().await;
        }
        tracing::info!(brand_id = id, "Brand deleted");
        Ok(())
    }

    /// Make a brand current; its saved theme becomes the active theme.
    pub async fn select_brand(&self, id: &str) -> Result<Brand, StoreError> {
        let brand = {
            let mut state = self.state.write().await;
            let brand = find_brand(&state.brands, id).cloned().ok_or_else(|| {
                StoreError::Core(CoreError::NotFound {
                    entity: "brand",
                    id: id.to_string(),
                })
            })?;
            state.current_brand_id = brand.id.clone();
            state.active_theme = brand.theme.clone();
            brand
        };

        self.persist().await?;
        self.publish_active().await;
        tracing::info!(brand_id = %brand.id, "Brand selected");
        Ok(brand)
    }

    /* ---- active theme ---- */

    /// Replace the active theme wholesale.
    pub async fn set_active_theme(&self, theme: OperatorTheme) -> Result<OperatorTheme, StoreError> {
        theme.validate().map_err(StoreError::Core)?;
        {
            let mut state = self.state.write().await;
            state.active_theme = theme;
        }
        self.persist().await?;
        self.publish_active().await;
        Ok(self.active_theme().await)
    }

    /// Apply a partial patch to the active theme.
    pub async fn patch_active_theme(
        &self,
        patch: ThemePatch,
    ) -> Result<OperatorTheme, StoreError> {
        let patched = {
            let mut state = self.state.write().await;
            let patched = patch.apply(&state.active_theme).map_err(StoreError::Core)?;
            state.active_theme = patched.clone();
            patched
        };
        self.persist().await?;
        self.publish_active().await;
        Ok(patched)
    }

    /// Synthesize a full theme from three colors and make it active.
    pub async fn apply_simple_colors(
        &self,
        colors: SimpleThemeColors,
    ) -> Result<OperatorTheme, StoreError> {
        let theme = synthesize::from_simple(&colors).map_err(StoreError::Core)?;
        self.set_active_theme(theme).await
    }

    /// Commit the active theme onto the current brand.
    pub async fn save_active_to_brand(&self) -> Result<Brand, StoreError> {
        let brand = {
            let mut state = self.state.write().await;
            let current_id = state.current_brand_id.clone();
            let mut theme = state.active_theme.clone();
            let brand = find_brand_mut(&mut state.brands, &current_id).ok_or_else(|| {
                StoreError::Core(CoreError::NotFound {
                    entity: "brand",
                    id: current_id.clone(),
                })
            })?;
            theme.id = brand.id.clone();
            brand.theme = theme.clone();
            brand.updated_at = chrono::Utc::now();
            let brand = brand.clone();
            state.active_theme = theme;
            brand
        };

        self.persist().await?;
        tracing::info!(brand_id = %brand.id, "Active theme saved to brand");
        Ok(brand)
    }

    /* ---- internals ---- */

    async fn publish_active(&self) {
        let theme = self.active_theme().await;
        self.bus.publish(ThemeEvent::ThemeUpdate { theme });
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let snapshot = self.state.read().await.snapshot();
        self.kv.save(SNAPSHOT_KEY, &snapshot).await
    }
}

fn find_brand<'a>(brands: &'a [Brand], id: &str) -> Option<&'a Brand> {
    brands.iter().find(|b| b.id == id)
}

fn find_brand_mut<'a>(brands: &'a mut [Brand], id: &str) -> Option<&'a mut Brand> {
    brands.iter_mut().find(|b| b.id == id)
}

/// Re-establish invariants on a loaded snapshot.
fn restore(snapshot: Snapshot) -> State {
    let mut state = State {
        brands: snapshot.brands,
        current_brand_id: snapshot.current_brand_id,
        active_theme: snapshot.active_theme,
    };
    if state.brands.is_empty() {
        return seed();
    }
    if find_brand(&state.brands, &state.current_brand_id).is_none() {
        state.current_brand_id = state.brands[0].id.clone();
        state.active_theme = state.brands[0].theme.clone();
    }
    state
}

/// Fresh state: a neutral default brand plus one styled demo brand.
fn seed() -> State {
    let default_brand = Brand::new("Default", synthesize::default_theme());

    let crimson = synthesize::from_simple(&SimpleThemeColors {
        primary: "#c8102e".to_string(),
        navigation: "#1a1a1a".to_string(),
        accent: "#fdbb30".to_string(),
    })
    // Literals above are valid hex, so this cannot fail in practice.
    .unwrap_or_else(|_| synthesize::default_theme());
    let demo_brand = Brand::new("Crimson Classic", crimson);

    let current_brand_id = default_brand.id.clone();
    let active_theme = default_brand.theme.clone();
    State {
        brands: vec![default_brand, demo_brand],
        current_brand_id,
        active_theme,
    }
}
