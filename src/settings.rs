use anyhow::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::task;

/// Three-way safety selector from the settings surface. Maps, together with
/// the enable toggle, onto the numeric `safety_tolerance` sent with every
/// generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SafetyLevel {
    Strict,
    #[default]
    Moderate,
    Creative,
}

impl SafetyLevel {
    pub const ALL: [SafetyLevel; 3] = [
        SafetyLevel::Strict,
        SafetyLevel::Moderate,
        SafetyLevel::Creative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SafetyLevel::Strict => "Strict",
            SafetyLevel::Moderate => "Moderate",
            SafetyLevel::Creative => "Creative",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioSettings {
    /// fal.ai API key. Seeded from the FAL_KEY environment variable; can be
    /// overridden in Preferences. Submission is disabled while absent.
    pub api_key: Option<String>,
    pub safety_enabled: bool,
    pub safety_level: SafetyLevel,
    /// Requested clip length for the video panels, in seconds.
    pub video_duration_s: u32,
    pub show_advanced: bool,
    /// Remembered directory for asset downloads.
    pub download_dir: Option<String>,
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            api_key: std::env::var("FAL_KEY").ok().filter(|k| !k.trim().is_empty()),
            safety_enabled: true,
            safety_level: SafetyLevel::Moderate,
            video_duration_s: 7,
            show_advanced: false,
            download_dir: None,
        }
    }
}

impl StudioSettings {
    pub const VIDEO_DURATIONS: [u32; 5] = [5, 7, 10, 12, 15];

    /// Tolerance sent to the provider. Strict and Moderate only apply while
    /// safety is enabled; Creative and "disabled" both mean maximum freedom.
    pub fn safety_tolerance(&self) -> f32 {
        match (self.safety_enabled, self.safety_level) {
            (true, SafetyLevel::Strict) => 0.5,
            (true, SafetyLevel::Moderate) => 0.7,
            _ => 0.9,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }
}

// In-memory snapshot so panels building a request mid-frame never block on
// disk. Hydrated once at startup, refreshed on every save.
pub static SETTINGS_CACHE: Lazy<Mutex<Option<StudioSettings>>> = Lazy::new(|| Mutex::new(None));

pub fn load_settings() -> Option<StudioSettings> {
    SETTINGS_CACHE.lock().unwrap().clone()
}

fn settings_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("no user config directory"))?;
    Ok(base.join("animation-studio").join("settings.json"))
}

/// Load from disk, falling back to defaults (which pick up FAL_KEY) when the
/// file is missing. An on-disk file without a key still inherits the
/// environment key.
pub async fn get_settings() -> Result<StudioSettings> {
    let path = settings_path()?;
    let mut settings = match tokio::fs::read(&path).await {
        Ok(bytes) => serde_json::from_slice::<StudioSettings>(&bytes)?,
        Err(_) => StudioSettings::default(),
    };
    if !settings.has_api_key() {
        settings.api_key = std::env::var("FAL_KEY").ok().filter(|k| !k.trim().is_empty());
    }
    *SETTINGS_CACHE.lock().unwrap() = Some(settings.clone());
    Ok(settings)
}

/// Update the cache immediately and persist in the background.
pub fn save_settings(s: &StudioSettings) {
    *SETTINGS_CACHE.lock().unwrap() = Some(s.clone());
    let to_save = s.clone();
    task::spawn(async move {
        if let Err(e) = save_settings_to_disk(&to_save).await {
            log::error!("[settings] save failed: {e}");
        }
    });
}

pub async fn save_settings_to_disk(s: &StudioSettings) -> Result<()> {
    let path = settings_path()?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_vec_pretty(s)?;
    tokio::fs::write(&path, json).await?;
    log::info!("[settings] saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(enabled: bool, level: SafetyLevel) -> StudioSettings {
        StudioSettings {
            safety_enabled: enabled,
            safety_level: level,
            ..Default::default()
        }
    }

    #[test]
    fn strict_and_moderate_map_when_enabled() {
        assert_eq!(with(true, SafetyLevel::Strict).safety_tolerance(), 0.5);
        assert_eq!(with(true, SafetyLevel::Moderate).safety_tolerance(), 0.7);
    }

    #[test]
    fn creative_means_maximum_freedom() {
        assert_eq!(with(true, SafetyLevel::Creative).safety_tolerance(), 0.9);
    }

    #[test]
    fn disabling_safety_overrides_the_level() {
        assert_eq!(with(false, SafetyLevel::Strict).safety_tolerance(), 0.9);
        assert_eq!(with(false, SafetyLevel::Moderate).safety_tolerance(), 0.9);
    }

    #[test]
    fn default_duration_is_seven_seconds() {
        let s = StudioSettings {
            api_key: None,
            ..Default::default()
        };
        assert_eq!(s.video_duration_s, 7);
        assert!(StudioSettings::VIDEO_DURATIONS.contains(&s.video_duration_s));
    }

    #[test]
    fn blank_api_key_counts_as_absent() {
        let mut s = StudioSettings::default();
        s.api_key = Some("   ".into());
        assert!(!s.has_api_key());
        s.api_key = Some("fal-key".into());
        assert!(s.has_api_key());
    }
}
