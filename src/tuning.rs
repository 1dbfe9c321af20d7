//! Game balance and layout constants
//!
//! Defaults mirror `consts`. Overrides are JSON and persisted separately
//! in LocalStorage on web.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be zero or more, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("platform width {platform} must be smaller than view width {view}")]
    PlatformTooWide { platform: f32, view: f32 },
    #[error("minimum platform count must be at least 1")]
    NoPlatforms,
    #[error("minimum platform count {count} exceeds {max}")]
    TooManyPlatforms { count: usize, max: usize },
}

/// Upper bound for `min_platforms`
pub const MAX_MIN_PLATFORMS: usize = 64;

/// Every number the simulation depends on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === View ===
    pub view_width: f32,
    pub view_height: f32,

    // === Physics ===
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_power: f32,

    // === Doodler ===
    pub doodler_width: f32,
    pub doodler_height: f32,
    /// Distance of the spawn point's top edge above the bottom of the view
    pub doodler_spawn_offset: f32,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_gap: f32,
    pub min_platforms: usize,
    pub scroll_rate: f32,

    // === Score ===
    pub points_per_platform: u32,
    pub score_display_offset: i64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,

            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_power: JUMP_POWER,

            doodler_width: DOODLER_WIDTH,
            doodler_height: DOODLER_HEIGHT,
            doodler_spawn_offset: DOODLER_SPAWN_OFFSET,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_gap: PLATFORM_GAP,
            min_platforms: MIN_PLATFORMS,
            scroll_rate: SCROLL_RATE,

            points_per_platform: POINTS_PER_PLATFORM,
            score_display_offset: SCORE_DISPLAY_OFFSET,
        }
    }
}

impl Tuning {
    /// Parse an override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the values the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("view_width", self.view_width),
            ("view_height", self.view_height),
            ("doodler_width", self.doodler_width),
            ("doodler_height", self.doodler_height),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("platform_gap", self.platform_gap),
            ("gravity", self.gravity),
            ("jump_power", self.jump_power),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        let non_negative = [
            ("move_speed", self.move_speed),
            ("scroll_rate", self.scroll_rate),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(TuningError::Negative { field, value });
            }
        }
        if self.platform_width >= self.view_width {
            return Err(TuningError::PlatformTooWide {
                platform: self.platform_width,
                view: self.view_width,
            });
        }
        if self.min_platforms == 0 {
            return Err(TuningError::NoPlatforms);
        }
        if self.min_platforms > MAX_MIN_PLATFORMS {
            return Err(TuningError::TooManyPlatforms {
                count: self.min_platforms,
                max: MAX_MIN_PLATFORMS,
            });
        }
        Ok(())
    }

    /// Where a fresh doodler's top-left corner goes
    pub fn doodler_spawn(&self) -> (f32, f32) {
        (
            self.view_width / 2.0 - self.doodler_width / 2.0,
            self.view_height - self.doodler_spawn_offset,
        )
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "doodle_climb_tuning";

    /// Load an override from LocalStorage, falling back to defaults (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning override from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring tuning override: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.doodler_spawn(), (180.0, 540.0));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.25, "min_platforms": 7 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.25);
        assert_eq!(tuning.min_platforms, 7);
        assert_eq!(tuning.jump_power, JUMP_POWER);
        assert_eq!(tuning.platform_gap, PLATFORM_GAP);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning {
            view_width: 320.0,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_wide_platforms() {
        let err = Tuning::from_json(r#"{ "platform_width": 400.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::PlatformTooWide { .. }));
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let err = Tuning::from_json(r#"{ "platform_gap": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NotPositive {
                field: "platform_gap",
                ..
            }
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "min_platforms": 0 }"#),
            Err(TuningError::NoPlatforms)
        ));
    }

    #[test]
    fn test_rejects_huge_platform_count() {
        let err = Tuning::from_json(r#"{ "min_platforms": 18446744073709551615 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::TooManyPlatforms {
                max: MAX_MIN_PLATFORMS,
                ..
            }
        ));
        assert!(Tuning::from_json(r#"{ "min_platforms": 64 }"#).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_gravity_and_jump() {
        for json in [r#"{ "gravity": -0.5 }"#, r#"{ "gravity": 0.0 }"#] {
            assert!(matches!(
                Tuning::from_json(json),
                Err(TuningError::NotPositive {
                    field: "gravity",
                    ..
                })
            ));
        }
        assert!(matches!(
            Tuning::from_json(r#"{ "jump_power": -11.0 }"#),
            Err(TuningError::NotPositive {
                field: "jump_power",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotPositive {
                field: "gravity",
                ..
            })
        ));

        let tuning = Tuning {
            jump_power: f32::INFINITY,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = Tuning {
            scroll_rate: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Negative {
                field: "scroll_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_speeds() {
        assert!(matches!(
            Tuning::from_json(r#"{ "move_speed": -7.0 }"#),
            Err(TuningError::Negative {
                field: "move_speed",
                ..
            })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "scroll_rate": -1.0 }"#),
            Err(TuningError::Negative {
                field: "scroll_rate",
                ..
            })
        ));
        // Standing still and a frozen field are allowed
        assert!(Tuning::from_json(r#"{ "move_speed": 0.0, "scroll_rate": 0.0 }"#).is_ok());
    }
}
