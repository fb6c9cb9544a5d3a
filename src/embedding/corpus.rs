use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::error::EmbeddingError;

/// On-disk JSON shape for [`CorpusStats`].
#[derive(Debug, Deserialize)]
struct CorpusStatsFile {
    corpus_size: u64,
    #[serde(default)]
    frequencies: HashMap<String, u64>,
}

/// Read-only word frequencies plus the total corpus size used to normalize them.
#[derive(Debug, Clone)]
pub struct CorpusStats {
    corpus_size: u64,
    frequencies: HashMap<String, u64>,
}

impl Default for CorpusStats {
    /// No frequencies and a corpus size of one: every word is maximally informative.
    fn default() -> Self {
        Self {
            corpus_size: 1,
            frequencies: HashMap::new(),
        }
    }
}

impl CorpusStats {
    pub fn new(corpus_size: u64, frequencies: HashMap<String, u64>) -> Result<Self, EmbeddingError> {
        if corpus_size == 0 {
            return Err(EmbeddingError::InvalidCorpusStats {
                reason: "corpus_size must be greater than zero".to_string(),
            });
        }
        Ok(Self {
            corpus_size,
            frequencies,
        })
    }

    /// Loads `{"corpus_size": N, "frequencies": {word: count}}` from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, EmbeddingError> {
        if !path.exists() {
            return Err(EmbeddingError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|source| EmbeddingError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let stats = Self::from_json_str(&raw)?;

        info!(
            path = %path.display(),
            corpus_size = stats.corpus_size,
            words = stats.frequencies.len(),
            "Corpus statistics loaded"
        );

        Ok(stats)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, EmbeddingError> {
        let file: CorpusStatsFile = serde_json::from_str(raw)?;
        Self::new(file.corpus_size, file.frequencies)
    }

    pub fn corpus_size(&self) -> u64 {
        self.corpus_size
    }

    /// Occurrence count, `0` for unseen words.
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// `1 - ln(freq + 1) / ln(corpus_size + 1)`.
    ///
    /// Unseen words score `1`; a word as frequent as the whole corpus scores `0`.
    pub fn information_content(&self, word: &str) -> f64 {
        let freq = self.frequency(word) as f64;
        let size = self.corpus_size as f64;
        1.0 - (freq + 1.0).ln() / (size + 1.0).ln()
    }
}
