use std::fmt;
use std::fs;
use std::path::Path;

/// Files the preview expects next to the binary's working directory.
pub const PREVIEW_FILES: [&str; 1] = ["config.json"];

/// Presence of one expected file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCheck {
    pub name: String,
    /// Size in bytes, `None` when missing.
    pub size: Option<u64>,
}

impl FileCheck {
    pub fn exists(&self) -> bool {
        self.size.is_some()
    }
}

impl fmt::Display for FileCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            Some(bytes) => write!(f, "✓ {} exists ({bytes} bytes)", self.name),
            None => write!(f, "✗ {} MISSING", self.name),
        }
    }
}

/// Stat each of `names` under `dir`, in order.
pub fn check_files<S: AsRef<str>>(dir: &Path, names: &[S]) -> Vec<FileCheck> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let size = fs::metadata(dir.join(name))
                .ok()
                .filter(|m| m.is_file())
                .map(|m| m.len());
            FileCheck {
                name: name.to_string(),
                size,
            }
        })
        .collect()
}
