//! Visual assets: ASCII-art sprites loaded once before the game may start.

pub mod provider;
pub mod startup;
pub mod types;

pub use provider::{AssetProvider, FsAssetProvider, MemoryAssetProvider};
pub use startup::{GateStatus, StartupGate};
pub use types::{AssetError, AssetId, AssetSet, Sprite};
