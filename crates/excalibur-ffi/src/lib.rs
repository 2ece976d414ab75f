//! UniFFI bindings for the Excalibur mobile app
//!
//! Exposes the native folder-opener capability to the Kotlin shell, which
//! registers it under [`PLUGIN_NAME`] at startup and invokes
//! `openDocumentsFolder` (the Kotlin rendering of [`open_documents_folder`])
//! with no arguments.

use std::path::PathBuf;
use std::sync::Once;

use excalibur_config::Config;
use excalibur_opener::{FolderOpener, OpenFolderError, SystemViewer};

uniffi::setup_scaffolding!();

/// Name the hosting shell registers this capability under.
pub const PLUGIN_NAME: &str = "FolderOpener";

static INIT: Once = Once::new();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PluginError {
    #[error("Failed to create folder")]
    FolderCreation { reason: String },
    #[error("No app found to open a folder")]
    NoHandler { reason: String },
}

impl From<OpenFolderError> for PluginError {
    fn from(err: OpenFolderError) -> Self {
        match err {
            OpenFolderError::FolderCreation(source) => Self::FolderCreation {
                reason: source.to_string(),
            },
            OpenFolderError::NoHandler => Self::NoHandler {
                reason: "no application can view the folder locator".to_string(),
            },
        }
    }
}

// ============ Plugin surface ============

/// Outcome of a successful folder-open request. `opened` is always `true`;
/// failures are delivered as [`PluginError`] rejections instead.
#[derive(Debug, uniffi::Record)]
pub struct OpenResult {
    pub opened: bool,
}

/// One-time process setup for the hosting shell.
///
/// Wires the platform logger so the plugin's diagnostics land in logcat.
/// Safe to call more than once.
#[uniffi::export]
pub fn initialize() {
    INIT.call_once(|| {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("FolderOpenerPlugin"),
        );

        log::info!("{PLUGIN_NAME} plugin initialized");
    });
}

/// Ensure the Excalibur documents folder exists and ask the system to open
/// it in a file explorer chooser.
#[uniffi::export]
pub fn open_documents_folder() -> Result<OpenResult, PluginError> {
    let opener = FolderOpener::new(documents_root(), SystemViewer::new());
    let outcome = opener.open_documents_folder()?;
    Ok(OpenResult {
        opened: outcome.opened,
    })
}

/// Configured documents root if one is saved, platform default otherwise.
fn documents_root() -> PathBuf {
    match Config::load() {
        Ok(Some(config)) => config.documents_root,
        Ok(None) => Config::default_documents_root(),
        Err(e) => {
            log::warn!("failed to load config, using default documents root: {e}");
            Config::default_documents_root()
        }
    }
}
