//! Named resource directory lookup

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// A directory of resource files (images) shipped with the crate
#[derive(Debug, Clone)]
pub struct Resources {
    root: PathBuf,
}

impl Resources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<crate>/resources`
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("resources"))
    }

    /// Full path to `name`, which must exist
    pub fn get_path(&self, name: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        if !path.is_file() {
            bail!(
                "resource {:?} not found in {}",
                name,
                self.root.display()
            );
        }
        Ok(path)
    }
}
