use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_grader_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("GRADER_EMBEDDINGS_PATH");
        env::remove_var("GRADER_CORPUS_STATS_PATH");
        env::remove_var("GRADER_MODEL");
        env::remove_var("GRADER_JUDGE_MAX_TOKENS");
        env::remove_var("GRADER_REWRITE_MAX_TOKENS");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.embeddings_path.is_none());
    assert!(config.corpus_stats_path.is_none());
    assert_eq!(config.model, "phi3.5");
    assert_eq!(config.judge_max_tokens, 10);
    assert_eq!(config.rewrite_max_tokens, 150);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_grader_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert!(config.embeddings_path.is_none());
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.judge_max_tokens, DEFAULT_JUDGE_MAX_TOKENS);
}

#[test]
#[serial]
fn test_from_env_custom_paths() {
    clear_grader_env();

    with_env_vars(
        &[
            ("GRADER_EMBEDDINGS_PATH", "/models/w2v.txt"),
            ("GRADER_CORPUS_STATS_PATH", "/models/brown.json"),
        ],
        || {
            let config = Config::from_env().expect("should parse");

            assert_eq!(config.embeddings_path, Some(PathBuf::from("/models/w2v.txt")));
            assert_eq!(
                config.corpus_stats_path,
                Some(PathBuf::from("/models/brown.json"))
            );
        },
    );
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear_grader_env();

    with_env_vars(&[("GRADER_EMBEDDINGS_PATH", "  "), ("GRADER_MODEL", "")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.embeddings_path.is_none());
        assert_eq!(config.model, "phi3.5");
    });
}

#[test]
#[serial]
fn test_from_env_model_and_token_limits() {
    clear_grader_env();

    with_env_vars(
        &[
            ("GRADER_MODEL", "llama3.2"),
            ("GRADER_JUDGE_MAX_TOKENS", "4"),
            ("GRADER_REWRITE_MAX_TOKENS", " 200 "),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.model, "llama3.2");
            assert_eq!(config.judge_max_tokens, 4);
            assert_eq!(config.rewrite_max_tokens, 200);
        },
    );
}

#[test]
#[serial]
fn test_invalid_token_limit_zero() {
    clear_grader_env();

    with_env_vars(&[("GRADER_JUDGE_MAX_TOKENS", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTokenLimit {
                name: "GRADER_JUDGE_MAX_TOKENS",
                ..
            }
        ));
        assert!(err.to_string().contains("greater than zero"));
    });
}

#[test]
#[serial]
fn test_invalid_token_limit_not_number() {
    clear_grader_env();

    with_env_vars(&[("GRADER_REWRITE_MAX_TOKENS", "lots")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::TokenLimitParseError { .. }));
        assert!(err.to_string().contains("GRADER_REWRITE_MAX_TOKENS"));
    });
}

#[test]
fn test_validate_nonexistent_embeddings_path() {
    let config = Config {
        embeddings_path: Some(PathBuf::from("/nonexistent/path/to/vectors.txt")),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_corpus_stats_path_is_directory() {
    let config = Config {
        corpus_stats_path: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotAFile { .. }));
}

#[test]
fn test_validate_success_with_valid_paths() {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let config = Config {
        embeddings_path: Some(manifest.clone()),
        corpus_stats_path: Some(manifest),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_success_with_defaults() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::PathNotFound {
        path: PathBuf::from("/some/path"),
    };
    assert!(err.to_string().contains("/some/path"));

    let err = ConfigError::InvalidTokenLimit {
        name: "GRADER_JUDGE_MAX_TOKENS",
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("GRADER_JUDGE_MAX_TOKENS"));
}
