pub mod input;
pub mod output;

pub use input::{ensure_finite, ParameterInput};
pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::core::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Open the report destination: a file when a path is given, stdout otherwise.
pub fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>, Error> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                ensure_dir(parent)?;
            }
            let file = fs::File::create(path)
                .map_err(|e| Error::file_system("Failed to create output file", path, e))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn ensure_dir(path: &Path) -> Result<(), Error> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| Error::file_system("Failed to create directory", path, e))?;
    }
    Ok(())
}
