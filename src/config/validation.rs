//! Configuration validation with error accumulation.
//!
//! Each section validator returns a stillwater [`Validation`] so every
//! problem is collected before reporting, and a user sees all
//! configuration issues in one run.

use stillwater::{NonEmptyVec, Validation};

use super::core::{Backend, PotabilityConfig};

/// Upper bound for the simulated heuristic latency.
pub const MAX_LATENCY_MS: u64 = 60_000;

/// Upper bound for remote retries.
pub const MAX_RETRIES: u32 = 10;

/// Accumulated configuration problems, one message per invalid field.
pub type ConfigValidation<T> = Validation<T, NonEmptyVec<String>>;

/// Validate the whole config, returning every problem found.
///
/// # Example
///
/// ```rust
/// use potability::config::{validate_config, PotabilityConfig};
///
/// assert!(validate_config(&PotabilityConfig::default()).is_success());
/// ```
pub fn validate_config(config: &PotabilityConfig) -> ConfigValidation<()> {
    let validations = vec![validate_classifier(config), validate_retry(config)];

    combine_validations(validations).map(|_| ())
}

/// Combine validations, keeping every failure in order.
pub fn combine_validations<T>(
    validations: Vec<ConfigValidation<T>>,
) -> ConfigValidation<Vec<T>> {
    let mut successes = Vec::new();
    let mut failures = Vec::new();

    for v in validations {
        match v {
            Validation::Success(value) => successes.push(value),
            Validation::Failure(errors) => failures.extend(errors),
        }
    }

    match NonEmptyVec::from_vec(failures) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(successes),
    }
}

fn from_errors(errors: Vec<String>) -> ConfigValidation<()> {
    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

fn validate_classifier(config: &PotabilityConfig) -> ConfigValidation<()> {
    let classifier = &config.classifier;
    let mut errors = Vec::new();

    if classifier.latency_ms > MAX_LATENCY_MS {
        errors.push(format!(
            "classifier.latency_ms out of range: {} (must be at most {})",
            classifier.latency_ms, MAX_LATENCY_MS
        ));
    }

    match (&classifier.backend, &classifier.remote) {
        (Backend::Remote, None) => {
            errors.push("classifier.remote is required when backend = \"remote\"".to_string());
        }
        (_, Some(remote)) => {
            let endpoint = remote.endpoint.trim();
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                errors.push(format!(
                    "classifier.remote.endpoint must be an http(s) URL, got '{}'",
                    remote.endpoint
                ));
            }
            if remote.timeout_seconds == 0 {
                errors.push(
                    "classifier.remote.timeout_seconds must be greater than zero".to_string(),
                );
            }
        }
        (Backend::Heuristic, None) => {}
    }

    from_errors(errors)
}

fn validate_retry(config: &PotabilityConfig) -> ConfigValidation<()> {
    let retry = &config.retry;
    let mut errors = Vec::new();

    if retry.max_retries > MAX_RETRIES {
        errors.push(format!(
            "retry.max_retries out of range: {} (must be at most {})",
            retry.max_retries, MAX_RETRIES
        ));
    }
    if !(0.0..=1.0).contains(&retry.jitter_factor) {
        errors.push(format!(
            "retry.jitter_factor out of range: {} (must be 0.0-1.0)",
            retry.jitter_factor
        ));
    }
    if retry.enabled && retry.timeout_seconds == 0 {
        errors.push(
            "retry.timeout_seconds must be greater than zero when retries are enabled".to_string(),
        );
    }

    from_errors(errors)
}

/// Fail-fast view: every accumulated message joined into one string.
pub fn validate_config_result(config: &PotabilityConfig) -> Result<(), String> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.into_vec().join("; ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RemoteConfig, RetryConfig};

    fn failures(validation: ConfigValidation<()>) -> Vec<String> {
        match validation {
            Validation::Failure(errors) => errors.into_vec(),
            Validation::Success(()) => panic!("expected validation failure"),
        }
    }

    #[test]
    fn test_remote_backend_requires_remote_section() {
        let mut config = PotabilityConfig::default();
        config.classifier.backend = Backend::Remote;
        let errors = failures(validate_config(&config));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("classifier.remote is required"));
    }

    #[test]
    fn test_accumulates_all_errors() {
        let mut config = PotabilityConfig::default();
        config.classifier.latency_ms = MAX_LATENCY_MS + 1;
        config.classifier.remote = Some(RemoteConfig {
            endpoint: "ftp://models".into(),
            timeout_seconds: 0,
        });
        config.retry = RetryConfig {
            max_retries: 50,
            jitter_factor: 2.0,
            ..Default::default()
        };
        let errors = failures(validate_config(&config));
        assert_eq!(errors.len(), 5, "{:?}", errors);
        assert!(errors[0].starts_with("classifier.latency_ms"));
        assert!(errors[4].starts_with("retry."));
    }

    #[test]
    fn test_valid_remote_config() {
        let mut config = PotabilityConfig::default();
        config.classifier.backend = Backend::Remote;
        config.classifier.remote = Some(RemoteConfig::new("https://models.example/classify"));
        assert!(validate_config(&config).is_success());
    }

    #[test]
    fn test_combine_keeps_successes_when_nothing_fails() {
        let combined = combine_validations(vec![Validation::Success(1), Validation::Success(2)]);
        match combined {
            Validation::Success(values) => assert_eq!(values, vec![1, 2]),
            Validation::Failure(errors) => panic!("unexpected failures: {:?}", errors.into_vec()),
        }
    }

    #[test]
    fn test_result_view_joins_messages() {
        let mut config = PotabilityConfig::default();
        config.classifier.backend = Backend::Remote;
        config.retry.jitter_factor = -1.0;
        let message = validate_config_result(&config).unwrap_err();
        assert!(message.contains("classifier.remote is required"));
        assert!(message.contains("; retry.jitter_factor"));
    }
}
