// Test utility module for potability integration tests
#![allow(dead_code)]

pub mod http_stub;

use potability::{ParameterKey, ParameterSet};
use std::path::{Path, PathBuf};

/// Default readings with one key changed.
pub fn with_reading(key: ParameterKey, value: f64) -> ParameterSet {
    ParameterSet::default().with(key, value)
}

/// Every reading at the lower catalog bound.
pub fn all_zero() -> ParameterSet {
    ParameterSet::uniform(0.0)
}

pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}
