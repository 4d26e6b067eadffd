//! Startup gating against the bundled asset directory.

use dragonflap::assets::{AssetError, AssetId, FsAssetProvider, GateStatus, StartupGate};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

fn bundled_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

#[test]
fn test_bundled_assets_load() {
    let assets = StartupGate::spawn(FsAssetProvider::new(bundled_assets()))
        .wait()
        .unwrap();
    for id in AssetId::ALL {
        let sprite = assets.get(id);
        assert!(sprite.width > 0 && sprite.height > 0, "{:?} is blank", id);
    }
}

#[test]
fn test_dragon_frames_fit_the_player_box() {
    let assets = StartupGate::spawn(FsAssetProvider::new(bundled_assets()))
        .wait()
        .unwrap();
    // 180x180 world units is about 11 columns by 5 rows
    for id in [AssetId::DragonUp, AssetId::DragonDown] {
        let sprite = assets.get(id);
        assert!(sprite.width <= 12, "{:?} too wide", id);
        assert!(sprite.height <= 5, "{:?} too tall", id);
    }
}

#[test]
fn test_polling_reaches_ready() {
    let mut gate = StartupGate::spawn(FsAssetProvider::new(bundled_assets()));
    let status = loop {
        match gate.poll() {
            GateStatus::Loading => thread::sleep(Duration::from_millis(5)),
            other => break other,
        }
    };
    assert!(matches!(status, GateStatus::Ready(_)));
}

#[test]
fn test_missing_directory_fails_on_the_title_card() {
    let dir = std::env::temp_dir().join("dragonflap-no-such-assets-dir");
    let err = StartupGate::spawn(FsAssetProvider::new(dir))
        .wait()
        .unwrap_err();
    assert!(matches!(err, AssetError::Io { .. }));
    assert_eq!(err.asset(), Some(AssetId::Start));
    assert!(err.to_string().contains("start.txt"));
}
