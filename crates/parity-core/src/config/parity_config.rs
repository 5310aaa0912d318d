//! Top-level parity configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    DeviationConfig, IssueConfig, MatchingConfig, ScoringConfig, TaxonomyConfig, TokenConfig,
    VisualConfig,
};
use crate::errors::ConfigError;

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "parity.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Caller overrides (applied via `apply_overrides`)
/// 2. Environment variables (`PARITY_*`)
/// 3. Project config (`parity.toml` in project root)
/// 4. User config (`~/.parity/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParityConfig {
    pub taxonomy: TaxonomyConfig,
    pub tokens: TokenConfig,
    pub matching: MatchingConfig,
    pub deviation: DeviationConfig,
    pub scoring: ScoringConfig,
    pub visual: VisualConfig,
    pub issues: IssueConfig,
}

/// Caller-supplied overrides, the highest-priority layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub visual_threshold: Option<f64>,
    pub token_top_n: Option<usize>,
    pub color_tolerance: Option<f64>,
    pub environment: Option<String>,
}

impl ParityConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ParityConfig) -> Result<(), ConfigError> {
        let atom_max = config.taxonomy.effective_atom_max_children();
        let molecule_max = config.taxonomy.effective_molecule_max_children();
        if atom_max >= molecule_max {
            return Err(ConfigError::ValidationFailed {
                field: "taxonomy.atom_max_children".to_string(),
                message: format!(
                    "must be less than taxonomy.molecule_max_children ({molecule_max})"
                ),
            });
        }

        if config.tokens.effective_top_n() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "tokens.top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        check_positive("tokens.rem_base_px", config.tokens.rem_base_px)?;

        check_unit_range("matching.min_overlap", config.matching.min_overlap)?;
        check_unit_range("visual.threshold", config.visual.threshold)?;

        for (field, value) in [
            ("deviation.color_tolerance", config.deviation.color_tolerance),
            ("deviation.color_major", config.deviation.color_major),
            ("deviation.color_critical", config.deviation.color_critical),
            ("deviation.font_size_tolerance", config.deviation.font_size_tolerance),
            ("deviation.font_size_major", config.deviation.font_size_major),
            ("deviation.line_height_tolerance", config.deviation.line_height_tolerance),
            ("deviation.spacing_minor", config.deviation.spacing_minor),
            ("deviation.spacing_major", config.deviation.spacing_major),
            ("deviation.radius_tolerance", config.deviation.radius_tolerance),
            ("scoring.critical_weight", config.scoring.critical_weight),
            ("scoring.major_weight", config.scoring.major_weight),
            ("scoring.medium_weight", config.scoring.medium_weight),
            ("scoring.minor_weight", config.scoring.minor_weight),
        ] {
            check_non_negative(field, value)?;
        }

        if config.deviation.effective_color_major() > config.deviation.effective_color_critical() {
            return Err(ConfigError::ValidationFailed {
                field: "deviation.color_major".to_string(),
                message: "must not exceed deviation.color_critical".to_string(),
            });
        }
        if config.deviation.effective_spacing_minor() > config.deviation.effective_spacing_major() {
            return Err(ConfigError::ValidationFailed {
                field: "deviation.spacing_minor".to_string(),
                message: "must not exceed deviation.spacing_major".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the user config path: `~/.parity/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".parity").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ParityConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ParityConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut ParityConfig, other: &ParityConfig) {
        // Taxonomy
        if other.taxonomy.atom_max_children.is_some() {
            base.taxonomy.atom_max_children = other.taxonomy.atom_max_children;
        }
        if other.taxonomy.molecule_max_children.is_some() {
            base.taxonomy.molecule_max_children = other.taxonomy.molecule_max_children;
        }

        // Tokens
        if other.tokens.top_n.is_some() {
            base.tokens.top_n = other.tokens.top_n;
        }
        if other.tokens.rem_base_px.is_some() {
            base.tokens.rem_base_px = other.tokens.rem_base_px;
        }

        // Matching
        if !other.matching.design_key_attributes.is_empty() {
            base.matching.design_key_attributes = other.matching.design_key_attributes.clone();
        }
        if other.matching.min_overlap.is_some() {
            base.matching.min_overlap = other.matching.min_overlap;
        }
        if other.matching.positional_fallback.is_some() {
            base.matching.positional_fallback = other.matching.positional_fallback;
        }

        // Deviation
        let (b, o) = (&mut base.deviation, &other.deviation);
        merge_opt(&mut b.color_tolerance, o.color_tolerance);
        merge_opt(&mut b.color_major, o.color_major);
        merge_opt(&mut b.color_critical, o.color_critical);
        merge_opt(&mut b.font_size_tolerance, o.font_size_tolerance);
        merge_opt(&mut b.font_size_major, o.font_size_major);
        merge_opt(&mut b.line_height_tolerance, o.line_height_tolerance);
        merge_opt(&mut b.spacing_minor, o.spacing_minor);
        merge_opt(&mut b.spacing_major, o.spacing_major);
        merge_opt(&mut b.radius_tolerance, o.radius_tolerance);

        // Scoring
        let (b, o) = (&mut base.scoring, &other.scoring);
        merge_opt(&mut b.critical_weight, o.critical_weight);
        merge_opt(&mut b.major_weight, o.major_weight);
        merge_opt(&mut b.medium_weight, o.medium_weight);
        merge_opt(&mut b.minor_weight, o.minor_weight);

        // Visual
        merge_opt(&mut base.visual.threshold, other.visual.threshold);

        // Issues
        if other.issues.environment.is_some() {
            base.issues.environment = other.issues.environment.clone();
        }
        if other.issues.id_prefix.is_some() {
            base.issues.id_prefix = other.issues.id_prefix.clone();
        }
        if other.issues.escalate_interactive.is_some() {
            base.issues.escalate_interactive = other.issues.escalate_interactive;
        }
        if other.issues.escalate_color.is_some() {
            base.issues.escalate_color = other.issues.escalate_color;
        }
        if !other.issues.interactive_categories.is_empty() {
            base.issues.interactive_categories = other.issues.interactive_categories.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PARITY_VISUAL_THRESHOLD`, `PARITY_TOKENS_TOP_N`, etc.
    fn apply_env_overrides(config: &mut ParityConfig) {
        if let Ok(val) = std::env::var("PARITY_VISUAL_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.visual.threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PARITY_TOKENS_TOP_N") {
            if let Ok(v) = val.parse::<usize>() {
                config.tokens.top_n = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PARITY_COLOR_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.deviation.color_tolerance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PARITY_MATCHING_MIN_OVERLAP") {
            if let Ok(v) = val.parse::<f64>() {
                config.matching.min_overlap = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PARITY_ENVIRONMENT") {
            config.issues.environment = Some(val);
        }
    }

    /// Apply caller overrides (highest priority).
    fn apply_overrides(config: &mut ParityConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.visual_threshold {
            config.visual.threshold = Some(v);
        }
        if let Some(v) = overrides.token_top_n {
            config.tokens.top_n = Some(v);
        }
        if let Some(v) = overrides.color_tolerance {
            config.deviation.color_tolerance = Some(v);
        }
        if let Some(ref v) = overrides.environment {
            config.issues.environment = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn merge_opt<T: Copy>(base: &mut Option<T>, other: Option<T>) {
    if other.is_some() {
        *base = other;
    }
}

fn check_non_negative(field: &str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be a finite value >= 0".to_string(),
        }),
        _ => Ok(()),
    }
}

fn check_positive(field: &str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be greater than 0".to_string(),
        }),
        _ => Ok(()),
    }
}

fn check_unit_range(field: &str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !(0.0..=1.0).contains(&v) => Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        }),
        _ => Ok(()),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
