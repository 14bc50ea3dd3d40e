use super::table::{self, PositionTable};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Engine configuration. The skill variants are presets of this one
/// struct: they differ only in depth, pruning and evaluation weights,
/// not in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub search: SearchConfig,
    pub evaluation: EvaluationConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fixed ply depth; the search always runs to exactly this horizon.
    pub max_depth: u32,
    /// With pruning off the same search is the plain minimax reference.
    pub use_pruning: bool,
    /// Re-check the chosen square against the rules before returning it,
    /// falling back to a pass. Input sanitisation, not search logic.
    pub validate_decision: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub position_weight: i32,
    pub mobility_weight: i32,
    pub material_weight: i32,
    pub table: PositionTable,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string("ai_config.json")?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }

    /// Cached config: `ai_config.json` if present, built-in default otherwise.
    pub fn get() -> &'static AIConfig {
        static CONFIG: Lazy<AIConfig> = Lazy::new(AIConfig::load_or_default);
        &CONFIG
    }

    /// Shallow unpruned search with flat weights.
    pub fn light() -> Self {
        AIConfig {
            search: SearchConfig {
                max_depth: 2,
                use_pruning: false,
                validate_decision: false,
            },
            evaluation: EvaluationConfig {
                position_weight: 1,
                mobility_weight: 1,
                material_weight: 1,
                table: table::BALANCED,
            },
        }
    }

    /// Four plies with pruning, mobility-heavy weights.
    pub fn standard() -> Self {
        AIConfig {
            search: SearchConfig {
                max_depth: 4,
                use_pruning: true,
                validate_decision: true,
            },
            evaluation: EvaluationConfig {
                position_weight: 5,
                mobility_weight: 15,
                material_weight: 1,
                table: table::CLASSIC,
            },
        }
    }

    /// Same weights as `standard`, two plies deeper.
    pub fn strong() -> Self {
        let mut config = Self::standard();
        config.search.max_depth = 6;
        config
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        Self::standard()
    }
}
