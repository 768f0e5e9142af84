mod fs;

pub use fs::*;

use std::path::Path;

use crate::error::Result;
use crate::model::toc::{IndexPage, TocDocument};

/// Destination for generated documents. The builder decides what gets
/// written and where; an `Emitter` performs the write.
pub trait Emitter {
    /// Write a navigation document to `path` as YAML.
    fn emit_toc(&mut self, path: &Path, toc: &TocDocument) -> Result<()>;

    /// Write the landing page document to `path` as YAML.
    fn emit_index(&mut self, path: &Path, index: &IndexPage) -> Result<()>;

    /// Write a plain text document to `path`.
    fn emit_text(&mut self, path: &Path, text: &str) -> Result<()>;
}
