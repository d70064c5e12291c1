//! Engine configuration with documented constants
//!
//! Every tunable number used by the reach and vision queries lives here so the
//! rules that depend on them can be read in one place.

/// Configuration for the reach and vision engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    // === VISION ===
    /// Extra sight radius for a unit in its unfolded (entrenched) stance
    ///
    /// Takes precedence over the elevation bonus; the two never stack.
    pub unfolded_vision_bonus: i32,

    /// Extra sight radius for a foot soldier standing on elevated terrain
    pub elevation_vision_bonus: i32,

    /// Radius of the ring around a unit that is always visible to its owner
    ///
    /// Applied after concealment filtering, so it overrides forests and reefs.
    pub always_visible_ring: i32,

    // === FOG CACHE ===
    /// Number of board versions a single `Fog` keeps bitmaps for
    ///
    /// The oldest version is evicted first. Action resolution typically
    /// alternates between two or three boards (live, preview, redacted), so a
    /// small number is enough.
    pub fog_cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            unfolded_vision_bonus: 2,
            elevation_vision_bonus: 1,
            always_visible_ring: 1,
            fog_cache_capacity: 8,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.unfolded_vision_bonus < 0 || self.elevation_vision_bonus < 0 {
            return Err(format!(
                "vision bonuses must not be negative (unfolded {}, elevation {})",
                self.unfolded_vision_bonus, self.elevation_vision_bonus
            ));
        }

        if self.always_visible_ring < 0 {
            return Err(format!(
                "always_visible_ring ({}) must not be negative",
                self.always_visible_ring
            ));
        }

        if self.fog_cache_capacity == 0 {
            return Err("fog_cache_capacity must hold at least one board".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Get the global engine config (initializes with defaults if not set)
pub fn config() -> &'static EngineConfig {
    CONFIG.get_or_init(EngineConfig::default)
}

/// Set the global engine config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: EngineConfig) -> Result<(), EngineConfig> {
    CONFIG.set(config)
}
