use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::error::EmbeddingError;
use crate::similarity::cosine_similarity;

/// Read-only word → vector table.
///
/// Tokens absent from the table are out-of-vocabulary; there is no zero-vector
/// fallback.
#[derive(Clone, Default)]
pub struct WordVectors {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl std::fmt::Debug for WordVectors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordVectors")
            .field("dim", &self.dim)
            .field("vocabulary", &self.vectors.len())
            .finish()
    }
}

impl WordVectors {
    /// An empty table: every token is out-of-vocabulary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a table from `(word, vector)` pairs. All vectors must share one dimension.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, EmbeddingError>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for (idx, (word, vector)) in entries.into_iter().enumerate() {
            table.insert(idx + 1, word.into(), vector)?;
        }
        Ok(table)
    }

    /// Loads a word2vec text-format file (optional `count dim` header line).
    pub fn load_word2vec_text(path: &Path) -> Result<Self, EmbeddingError> {
        if !path.exists() {
            return Err(EmbeddingError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| EmbeddingError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_reader(BufReader::new(file))?;

        info!(
            path = %path.display(),
            vocabulary = table.len(),
            dim = table.dim(),
            "Word vectors loaded"
        );

        Ok(table)
    }

    /// Parses word2vec text format from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, EmbeddingError> {
        let mut table = Self::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let mut fields = line.split_whitespace();

            let Some(word) = fields.next() else {
                continue;
            };

            let values: Vec<&str> = fields.collect();

            if line_no == 1 && values.len() == 1 && is_header(word, values[0]) {
                debug!(header = %line, "Skipping word2vec header");
                continue;
            }

            let vector = values
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| EmbeddingError::MalformedLine {
                    line: line_no,
                    reason: e.to_string(),
                })?;

            if vector.is_empty() {
                return Err(EmbeddingError::MalformedLine {
                    line: line_no,
                    reason: format!("no vector components for '{}'", word),
                });
            }

            table.insert(line_no, word.to_string(), vector)?;
        }

        Ok(table)
    }

    fn insert(&mut self, line: usize, word: String, vector: Vec<f32>) -> Result<(), EmbeddingError> {
        if self.dim == 0 {
            self.dim = vector.len();
        } else if vector.len() != self.dim {
            return Err(EmbeddingError::DimensionMismatch {
                line,
                expected: self.dim,
                actual: vector.len(),
            });
        }
        self.vectors.insert(word, vector);
        Ok(())
    }

    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }

    /// Cosine similarity of two in-vocabulary words, `None` if either is OOV.
    pub fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let va = self.get(a)?;
        let vb = self.get(b)?;
        Some(cosine_similarity(va, vb))
    }

    /// Vector dimension (`0` for an empty table).
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

fn is_header(first: &str, second: &str) -> bool {
    first.parse::<usize>().is_ok() && second.parse::<usize>().is_ok()
}
