//! Settings for a directory conversion run.

use std::path::PathBuf;

/// Where [`crate::convert_directory`] reads schemas from, where it writes
/// Swagger documents to, and which template it stamps them into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSettings {
    /// Directory whose immediate `*.json` children are converted.
    ///
    /// **Default: `.`**
    pub source_dir: PathBuf,

    /// Directory the Swagger documents are written to, created on demand.
    /// Existing files of the same name are overwritten.
    ///
    /// **Default: `./swagger`**
    pub dest_dir: PathBuf,

    /// Swagger template to stamp. When `None` the built-in template is used.
    pub template_path: Option<PathBuf>,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            dest_dir: PathBuf::from("./swagger"),
            template_path: None,
        }
    }
}
