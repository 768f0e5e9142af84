use anyhow::Context;
use serde::Serialize;
use std::{fs, path::Path};
use tracing::debug;

use super::Emitter;
use crate::error::Result;
use crate::model::toc::{IndexPage, TocDocument};

/// Writes generated documents straight to disk, unconditionally overwriting
/// whatever is already at the target path.
#[derive(Debug, Default)]
pub struct FsEmitter;

impl FsEmitter {
    fn write_yaml(&self, path: &Path, document: &impl Serialize) -> Result<()> {
        let yaml = serde_yaml::to_string(document)
            .with_context(|| format!("Failed to serialize {}", path.display()))?;

        self.write(path, &yaml)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {}", path.display());

        Ok(())
    }
}

impl Emitter for FsEmitter {
    fn emit_toc(&mut self, path: &Path, toc: &TocDocument) -> Result<()> {
        self.write_yaml(path, toc)
    }

    fn emit_index(&mut self, path: &Path, index: &IndexPage) -> Result<()> {
        self.write_yaml(path, index)
    }

    fn emit_text(&mut self, path: &Path, text: &str) -> Result<()> {
        self.write(path, text)
    }
}
