pub mod check;
pub mod error;
pub mod loader;
pub mod source;

pub use check::{FileCheck, PREVIEW_FILES, check_files};
pub use error::{ConfigError, Result};
pub use loader::{ConfigFormat, load, load_or_default, parse_config, validate};
pub use source::{ConfigSource, DEFAULT_CONFIG_PATH};
