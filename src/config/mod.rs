// Sub-modules
mod core;
mod loader;
pub mod retry;
pub mod validation;

pub use self::core::{Backend, ClassifierConfig, OutputConfig, PotabilityConfig, RemoteConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use retry::{RetryConfig, RetryStrategy};
pub use validation::{validate_config, validate_config_result, ConfigValidation};
