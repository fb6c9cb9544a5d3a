//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `GRADER_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_JUDGE_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_REWRITE_MAX_TOKENS};

/// Grader configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `GRADER_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Word2vec text-format embedding table. Unset means every token is OOV.
    pub embeddings_path: Option<PathBuf>,

    /// Corpus statistics JSON. Unset means flat information content.
    pub corpus_stats_path: Option<PathBuf>,

    /// Model identifier handed to the generation client. Default: `phi3.5`.
    pub model: String,

    /// Token limit per judge call. Default: `10`.
    pub judge_max_tokens: u32,

    /// Token limit for the feedback rewrite. Default: `150`.
    pub rewrite_max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embeddings_path: None,
            corpus_stats_path: None,
            model: DEFAULT_MODEL.to_string(),
            judge_max_tokens: DEFAULT_JUDGE_MAX_TOKENS,
            rewrite_max_tokens: DEFAULT_REWRITE_MAX_TOKENS,
        }
    }
}

impl Config {
    const ENV_EMBEDDINGS_PATH: &'static str = "GRADER_EMBEDDINGS_PATH";
    const ENV_CORPUS_STATS_PATH: &'static str = "GRADER_CORPUS_STATS_PATH";
    const ENV_MODEL: &'static str = "GRADER_MODEL";
    const ENV_JUDGE_MAX_TOKENS: &'static str = "GRADER_JUDGE_MAX_TOKENS";
    const ENV_REWRITE_MAX_TOKENS: &'static str = "GRADER_REWRITE_MAX_TOKENS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let embeddings_path = Self::parse_optional_path_from_env(Self::ENV_EMBEDDINGS_PATH);
        let corpus_stats_path = Self::parse_optional_path_from_env(Self::ENV_CORPUS_STATS_PATH);
        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let judge_max_tokens =
            Self::parse_token_limit_from_env(Self::ENV_JUDGE_MAX_TOKENS, defaults.judge_max_tokens)?;
        let rewrite_max_tokens = Self::parse_token_limit_from_env(
            Self::ENV_REWRITE_MAX_TOKENS,
            defaults.rewrite_max_tokens,
        )?;

        Ok(Self {
            embeddings_path,
            corpus_stats_path,
            model,
            judge_max_tokens,
            rewrite_max_tokens,
        })
    }

    /// Checks that configured resource paths are existing files.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for path in [&self.embeddings_path, &self.corpus_stats_path]
            .into_iter()
            .flatten()
        {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_token_limit_from_env(var_name: &'static str, default: u32) -> Result<u32, ConfigError> {
        match env::var(var_name) {
            Ok(value) => {
                let limit = value.trim().parse::<u32>().map_err(|e| {
                    ConfigError::TokenLimitParseError {
                        name: var_name,
                        value: value.clone(),
                        source: e,
                    }
                })?;

                if limit == 0 {
                    return Err(ConfigError::InvalidTokenLimit {
                        name: var_name,
                        value,
                    });
                }

                Ok(limit)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}
