//! One-shot background asset load gating entry into the game.
//!
//! The driver polls the gate every frame while drawing a loading screen.
//! The result is delivered exactly once; a failure is final and is never
//! retried.

use super::provider::AssetProvider;
use super::types::{AssetError, AssetSet};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Result of polling the gate.
#[derive(Debug)]
pub enum GateStatus {
    Loading,
    Ready(AssetSet),
    Failed(AssetError),
}

pub struct StartupGate {
    handle: Option<JoinHandle<Result<AssetSet, AssetError>>>,
    started: Instant,
}

impl StartupGate {
    /// Start loading on a background thread.
    pub fn spawn<P: AssetProvider + 'static>(provider: P) -> Self {
        let handle = thread::spawn(move || provider.load_all());
        Self {
            handle: Some(handle),
            started: Instant::now(),
        }
    }

    /// Non-blocking check. Returns `Ready`/`Failed` once, then `Failed`
    /// with [`AssetError::LoaderPanicked`] if polled again.
    pub fn poll(&mut self) -> GateStatus {
        let loading = self.handle.as_ref().is_some_and(|h| !h.is_finished());
        if loading {
            GateStatus::Loading
        } else {
            self.finish()
        }
    }

    /// Block until the load completes.
    pub fn wait(mut self) -> Result<AssetSet, AssetError> {
        match self.finish() {
            GateStatus::Ready(assets) => Ok(assets),
            GateStatus::Failed(e) => Err(e),
            GateStatus::Loading => Err(AssetError::LoaderPanicked),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn finish(&mut self) -> GateStatus {
        let Some(handle) = self.handle.take() else {
            return GateStatus::Failed(AssetError::LoaderPanicked);
        };
        let result = handle.join().unwrap_or(Err(AssetError::LoaderPanicked));
        match result {
            Ok(assets) => {
                log::info!("assets ready after {:?}", self.started.elapsed());
                GateStatus::Ready(assets)
            }
            Err(e) => {
                log::error!("startup halted: {}", e);
                GateStatus::Failed(e)
            }
        }
    }
}
