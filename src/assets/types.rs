//! Sprite and asset-set types.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every visual asset the game needs before it may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Start,
    DragonUp,
    DragonDown,
    Background,
    Pillar,
    End,
}

impl AssetId {
    /// Load order. The title card comes first so it is ready soonest.
    pub const ALL: [AssetId; 6] = [
        AssetId::Start,
        AssetId::DragonUp,
        AssetId::DragonDown,
        AssetId::Background,
        AssetId::Pillar,
        AssetId::End,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Start => "start.txt",
            Self::DragonUp => "dragon_up.txt",
            Self::DragonDown => "dragon_down.txt",
            Self::Background => "background.txt",
            Self::Pillar => "pillar.txt",
            Self::End => "end.txt",
        }
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load {}: {path}: {source}", .asset.file_name())]
    Io {
        asset: AssetId,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load {}: {path} is empty", .asset.file_name())]
    Empty { asset: AssetId, path: PathBuf },
    #[error("{} was not provided", .asset.file_name())]
    Missing { asset: AssetId },
    #[error("asset loader stopped unexpectedly")]
    LoaderPanicked,
}

impl AssetError {
    /// The asset that failed, when known.
    pub fn asset(&self) -> Option<AssetId> {
        match self {
            Self::Io { asset, .. } | Self::Empty { asset, .. } | Self::Missing { asset } => {
                Some(*asset)
            }
            Self::LoaderPanicked => None,
        }
    }
}

/// A block of ASCII art. Lines are kept as-is; width is the widest line in
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub lines: Vec<String>,
    pub width: usize,
    pub height: usize,
}

impl Sprite {
    /// Parse sprite text, dropping trailing blank lines. `None` when nothing
    /// visible remains.
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines: Vec<String> = text
            .lines()
            .map(|l| l.trim_end_matches('\r').to_string())
            .collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return None;
        }
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let height = lines.len();
        Some(Self {
            lines,
            width,
            height,
        })
    }

    /// Character at (`col`, `row`), or `None` outside the art or on a space.
    pub fn glyph(&self, col: usize, row: usize) -> Option<char> {
        self.lines
            .get(row)
            .and_then(|line| line.chars().nth(col))
            .filter(|c| *c != ' ')
    }
}

/// The full loaded asset set. Constructed only with every [`AssetId`]
/// present.
#[derive(Debug, Clone)]
pub struct AssetSet {
    sprites: HashMap<AssetId, Sprite>,
}

impl AssetSet {
    /// Build from a map, returning the first missing id on failure.
    pub fn from_map(sprites: HashMap<AssetId, Sprite>) -> Result<Self, AssetId> {
        if let Some(missing) = AssetId::ALL.iter().find(|id| !sprites.contains_key(id)) {
            return Err(*missing);
        }
        Ok(Self { sprites })
    }

    pub fn get(&self, id: AssetId) -> &Sprite {
        // from_map guarantees every id is present
        &self.sprites[&id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_trailing_blank_lines() {
        let sprite = Sprite::parse(" /\\\n<==>\n\n  \n").unwrap();
        assert_eq!(sprite.height, 2);
        assert_eq!(sprite.width, 4);
        assert_eq!(sprite.glyph(1, 0), Some('/'));
        assert_eq!(sprite.glyph(0, 0), None); // space is transparent
        assert_eq!(sprite.glyph(9, 9), None);
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert!(Sprite::parse("").is_none());
        assert!(Sprite::parse("   \n\n").is_none());
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let sprite = Sprite::parse("░▒▓").unwrap();
        assert_eq!(sprite.width, 3);
    }

    #[test]
    fn test_asset_set_requires_all() {
        let sprite = Sprite::parse("x").unwrap();
        let mut map: HashMap<AssetId, Sprite> = AssetId::ALL
            .iter()
            .map(|id| (*id, sprite.clone()))
            .collect();
        map.remove(&AssetId::Pillar);
        assert_eq!(AssetSet::from_map(map.clone()).unwrap_err(), AssetId::Pillar);

        map.insert(AssetId::Pillar, sprite);
        let set = AssetSet::from_map(map).unwrap();
        assert_eq!(set.get(AssetId::End).width, 1);
    }

    #[test]
    fn test_error_names_asset_file() {
        let err = AssetError::Empty {
            asset: AssetId::DragonDown,
            path: PathBuf::from("assets/dragon_down.txt"),
        };
        assert!(err.to_string().contains("dragon_down.txt"));
        assert_eq!(err.asset(), Some(AssetId::DragonDown));
    }
}
