//! Asset loading with embedded fallbacks
//!
//! The palette catalog and the config file ship inside the binary. Each can
//! be overridden by a file on disk:
//!
//! - If the env var is NOT set: use the embedded asset only (no filesystem access)
//! - If the env var IS set and the file is missing: seed it from the embedded copy
//! - If the env var IS set and the file exists: read the file

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CATALOG_FILE_NAME: &str = "catalog.yaml";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Embedded palette catalog
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "catalog.yaml"]
struct EmbeddedCatalog;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Catalog,
    Config,
}

impl AssetCategory {
    pub fn file_name(self) -> &'static str {
        match self {
            AssetCategory::Catalog => CATALOG_FILE_NAME,
            AssetCategory::Config => CONFIG_FILE_NAME,
        }
    }

    fn embedded(self) -> Option<Cow<'static, [u8]>> {
        let file = match self {
            AssetCategory::Catalog => EmbeddedCatalog::get(CATALOG_FILE_NAME),
            AssetCategory::Config => EmbeddedConfig::get(CONFIG_FILE_NAME),
        };
        file.map(|f| f.data)
    }
}

/// Report of seeding operations
#[derive(Debug, Default)]
pub struct SeedReport {
    pub catalog_seeded: bool,
    pub config_seeded: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        !self.catalog_seeded && !self.config_seeded
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External catalog file (from CATALOG_FILE env var)
    catalog_file: Option<PathBuf>,
    /// External config file (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(catalog_file: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            catalog_file,
            config_file,
        }
    }

    /// Loader configured from `CATALOG_FILE` and `CONFIG_FILE`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("CATALOG_FILE").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    /// The configured external path for a category, if any.
    pub fn external_path(&self, category: AssetCategory) -> Option<&Path> {
        match category {
            AssetCategory::Catalog => self.catalog_file.as_deref(),
            AssetCategory::Config => self.config_file.as_deref(),
        }
    }

    /// Human readable source of a category: the file path, or "embedded".
    pub fn source(&self, category: AssetCategory) -> String {
        match self.external_path(category) {
            Some(path) if path.exists() => path.display().to_string(),
            Some(_) => "embedded (file not found)".to_string(),
            None => "embedded".to_string(),
        }
    }

    /// Read an asset
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded copy.
    pub fn read(&self, category: AssetCategory) -> io::Result<Cow<'static, [u8]>> {
        if let Some(path) = self.external_path(category) {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading asset from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        category
            .embedded()
            .inspect(|_| tracing::trace!(asset = category.file_name(), "Loading embedded asset"))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded {} not found", category.file_name()),
                )
            })
    }

    /// Read an asset as a UTF-8 string
    pub fn read_string(&self, category: AssetCategory) -> io::Result<String> {
        let bytes = self.read(category)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn read_catalog_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Catalog)
    }

    pub fn read_config_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Config)
    }

    /// Write embedded copies to configured paths that do not exist yet
    pub fn seed_if_configured(&self) -> io::Result<SeedReport> {
        let mut report = SeedReport::default();

        for category in [AssetCategory::Catalog, AssetCategory::Config] {
            let Some(path) = self.external_path(category) else {
                continue;
            };
            if path.exists() {
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Some(data) = category.embedded() {
                fs::write(path, &*data)?;
                tracing::info!(path = %path.display(), "Seeded {} from embedded default", category.file_name());
                match category {
                    AssetCategory::Catalog => report.catalog_seeded = true,
                    AssetCategory::Config => report.config_seeded = true,
                }
            }
        }

        Ok(report)
    }

    /// Extract embedded assets to the filesystem (init command)
    ///
    /// Writes to the configured path of each category, or to its default file
    /// name inside `dir`.
    pub fn init(
        &self,
        categories: &[AssetCategory],
        dir: &Path,
        force: bool,
    ) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let path = self
                .external_path(category)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.join(category.file_name()));

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Some(data) = category.embedded() {
                fs::write(&path, &*data)?;
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Catalog => EmbeddedCatalog::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => EmbeddedConfig::iter().map(|s| s.to_string()).collect(),
        }
    }
}
