//! Asset providers.

use super::types::{AssetError, AssetId, AssetSet, Sprite};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Something that can produce the complete asset set in one go.
///
/// Loading is all-or-nothing: the first failing asset aborts the load and is
/// named in the error.
pub trait AssetProvider: Send {
    fn load_all(&self) -> Result<AssetSet, AssetError>;
}

/// Loads sprite text files from a directory.
#[derive(Debug, Clone)]
pub struct FsAssetProvider {
    dir: PathBuf,
}

impl FsAssetProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, asset: AssetId) -> PathBuf {
        self.dir.join(asset.file_name())
    }

    fn load_one(&self, asset: AssetId) -> Result<Sprite, AssetError> {
        let path = self.path_for(asset);
        let text = fs::read_to_string(&path).map_err(|source| AssetError::Io {
            asset,
            path: path.clone(),
            source,
        })?;
        let sprite = Sprite::parse(&text).ok_or(AssetError::Empty { asset, path })?;
        log::debug!(
            "loaded {} ({}x{})",
            asset.file_name(),
            sprite.width,
            sprite.height
        );
        Ok(sprite)
    }
}

impl AssetProvider for FsAssetProvider {
    fn load_all(&self) -> Result<AssetSet, AssetError> {
        log::info!("loading assets from {}", self.dir.display());
        let mut sprites = HashMap::new();
        for asset in AssetId::ALL {
            sprites.insert(asset, self.load_one(asset)?);
        }
        AssetSet::from_map(sprites).map_err(|asset| AssetError::Missing { asset })
    }
}

/// Provider backed by in-memory sprite text, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetProvider {
    texts: HashMap<AssetId, String>,
}

impl MemoryAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, asset: AssetId, text: impl Into<String>) -> Self {
        self.texts.insert(asset, text.into());
        self
    }
}

impl AssetProvider for MemoryAssetProvider {
    fn load_all(&self) -> Result<AssetSet, AssetError> {
        let mut sprites = HashMap::new();
        for asset in AssetId::ALL {
            let text = self
                .texts
                .get(&asset)
                .ok_or(AssetError::Missing { asset })?;
            let path = PathBuf::from(format!("<memory>/{}", asset.file_name()));
            let sprite = Sprite::parse(text).ok_or(AssetError::Empty { asset, path })?;
            sprites.insert(asset, sprite);
        }
        AssetSet::from_map(sprites).map_err(|asset| AssetError::Missing { asset })
    }
}
