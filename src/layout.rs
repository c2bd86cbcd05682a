//! Fixed locations of every input and output, relative to the web repo root.

use std::path::{Path, PathBuf};

const PUBLIC_DIR: &str = "frontend/public";
const HERO_SOURCE: &str = "backend/uploads/1760554663370.jpg";
const LOGO_SOURCE: &str = "TRBG Logov2-w-badge.png";

#[derive(Debug, Clone)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory served as-is by the frontend. Favicon candidates live here too.
    pub fn public_dir(&self) -> PathBuf {
        self.root.join(PUBLIC_DIR)
    }

    pub fn favicon_path(&self) -> PathBuf {
        self.public_dir().join("favicon.ico")
    }

    pub fn index_html(&self) -> PathBuf {
        self.public_dir().join("index.html")
    }

    pub fn splash_dir(&self) -> PathBuf {
        self.public_dir().join("splash")
    }

    pub fn og_dir(&self) -> PathBuf {
        self.public_dir().join("og")
    }

    pub fn hero_source(&self) -> PathBuf {
        self.root.join(HERO_SOURCE)
    }

    pub fn logo_source(&self) -> PathBuf {
        self.root.join(LOGO_SOURCE)
    }
}
