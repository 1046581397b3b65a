//! On-disk catalog format
//!
//! ```yaml
//! gray_pairs:
//!   indigo: slate
//! palettes:
//!   - name: indigo
//!     kind: base        # base | alpha | p3
//!     neutral: false
//!     light: { 1: "#fdfdfe", 9: "#3e63dd" }
//!     dark:  { 9: "#3e63dd" }
//! ```
//!
//! The order of `palettes` is the catalog order used for tie-breaking.

use std::collections::BTreeMap;

use oklch_match::catalog::{GrayPairTable, Palette, PaletteCatalog, PaletteKind, ShadeScale};
use serde::Deserialize;

use crate::assets::AssetLoader;
use crate::error::CatalogLoadError;

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub gray_pairs: BTreeMap<String, String>,
    pub palettes: Vec<PaletteEntry>,
}

#[derive(Debug, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    #[serde(default)]
    pub kind: PaletteKind,
    #[serde(default)]
    pub neutral: bool,
    #[serde(default)]
    pub light: BTreeMap<u8, String>,
    #[serde(default)]
    pub dark: BTreeMap<u8, String>,
}

impl PaletteEntry {
    fn into_palette(self) -> Result<Palette, CatalogLoadError> {
        let palette = Palette::new(
            self.name,
            ShadeScale::from_pairs(self.light)?,
            ShadeScale::from_pairs(self.dark)?,
        )
        .with_kind(self.kind);
        Ok(if self.neutral { palette.neutral() } else { palette })
    }
}

impl CatalogFile {
    pub fn from_yaml(content: &str) -> Result<Self, CatalogLoadError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Build the catalog and check its gray-pair invariant.
    pub fn into_catalog(self) -> Result<PaletteCatalog, CatalogLoadError> {
        let palettes = self
            .palettes
            .into_iter()
            .map(PaletteEntry::into_palette)
            .collect::<Result<Vec<_>, _>>()?;
        let gray_pairs: GrayPairTable = self.gray_pairs.into_iter().collect();

        let catalog = PaletteCatalog::new(palettes, gray_pairs)?;
        catalog.validate_gray_pairs()?;
        Ok(catalog)
    }
}

/// Load and validate the catalog from AssetLoader (embedded or external)
pub fn load_catalog(loader: &AssetLoader) -> Result<PaletteCatalog, CatalogLoadError> {
    let content = loader.read_catalog_string()?;
    let catalog = CatalogFile::from_yaml(&content)?.into_catalog()?;
    tracing::info!(
        palettes = catalog.len(),
        base = catalog.base_palettes().count(),
        gray_pairs = catalog.gray_pairs().len(),
        "Loaded palette catalog"
    );
    Ok(catalog)
}
