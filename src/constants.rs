//! Cross-cutting, shared constants.
//!
//! Thresholds are compared with strict `>`/`<` exactly as documented on each
//! constant; changing the comparison operator changes which verdict a boundary
//! value lands in.

/// Whole-answer similarity above which the lexical layer passes, and the
/// boundary between the `ALMOST` and `SLM_PASS_NLP_FAIL` decision rows.
pub const SIMILARITY_THRESHOLD: f64 = 0.75;

/// Default keystring presence threshold.
pub const KEYSTRING_THRESHOLD: f64 = 0.75;

/// Keystring presence threshold when `exact_match` is set.
pub const KEYSTRING_EXACT_THRESHOLD: f64 = 0.99;

/// Separator used when joining feedback segments.
pub const FEEDBACK_SEPARATOR: &str = "<br>";

/// Reserved marker placed at the start of lexical feedback that carries
/// caller-supplied custom feedback. Stripped before the result is emitted.
pub const CUSTOM_FEEDBACK_MARKER: &str = "[CUSTOM_FEEDBACK]";

/// Token limit for tri-state judge completions.
pub const DEFAULT_JUDGE_MAX_TOKENS: u32 = 10;

/// Token limit for the feedback rewrite completion.
pub const DEFAULT_REWRITE_MAX_TOKENS: u32 = 150;

/// Default model identifier handed to the generation client.
pub const DEFAULT_MODEL: &str = "phi3.5";

/// Metadata keys shared between the layers and the combiner.
pub mod metadata_keys {
    pub const SIMILARITY_VALUE: &str = "similarity_value";
    pub const BOW_SIMILARITY_VALUE: &str = "BOW_similarity_value";
    pub const PROBLEMATIC_WORD: &str = "problematic_word";
    pub const PROBLEMATIC_KEYSTRING: &str = "problematic_keystring";
    pub const PROBLEMATIC_KEYSTRINGS: &str = "problematic_keystrings";
    pub const KEYSTRING_SCORES: &str = "keystring-scores";
    pub const METHOD: &str = "method";
    pub const RESPONSE: &str = "response";
    pub const CONTEXTUAL_JUDGMENT: &str = "contextual_judgment";
    pub const TAG: &str = "tag";
    pub const NLP_SIMILARITY_VALUE: &str = "nlp_similarity_value";
    pub const NLP_BOW_SIMILARITY_VALUE: &str = "nlp_BOW_similarity_value";
    pub const NLP_PROCESSING_TIME: &str = "nlp_processing_time";
    pub const SLM_PROCESSING_TIME: &str = "slm_processing_time";
    pub const SLM_JUDGMENT: &str = "slm_judgment";
}
