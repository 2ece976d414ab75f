//! Platform dispatch of the folder-view request.
//!
//! On Android the request goes through the documents framework: an
//! ACTION_VIEW intent over the folder's content URI, resolved against the
//! package manager and launched through the system chooser. On other
//! platforms the locator's backing path is handed to the file manager
//! command so the capability stays usable during desktop development.

#[cfg(target_os = "android")]
mod android;

use crate::dispatch::{DispatchError, DocumentViewer};
use crate::locator::DocumentLocator;

/// Production [`DocumentViewer`] backed by the host platform's application
/// chooser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemViewer;

impl SystemViewer {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "android")]
impl DocumentViewer for SystemViewer {
    fn can_handle(&self, locator: &DocumentLocator) -> bool {
        android::can_resolve_view_intent(locator)
    }

    fn invoke(&self, locator: &DocumentLocator) -> Result<(), DispatchError> {
        android::launch_view_chooser(locator)
    }
}

#[cfg(not(target_os = "android"))]
impl DocumentViewer for SystemViewer {
    fn can_handle(&self, _locator: &DocumentLocator) -> bool {
        file_manager::launcher_in_path()
    }

    fn invoke(&self, locator: &DocumentLocator) -> Result<(), DispatchError> {
        file_manager::open(locator.path())
    }
}

#[cfg(not(target_os = "android"))]
mod file_manager {
    use std::env;
    use std::path::Path;
    use std::process::Command;

    use crate::dispatch::DispatchError;

    #[cfg(target_os = "windows")]
    const LAUNCHER: &str = "explorer.exe";
    #[cfg(target_os = "macos")]
    const LAUNCHER: &str = "open";
    #[cfg(all(unix, not(target_os = "macos")))]
    const LAUNCHER: &str = "xdg-open";

    /// Whether the platform's file manager launcher is present on PATH.
    pub fn launcher_in_path() -> bool {
        let Some(paths) = env::var_os("PATH") else {
            return false;
        };
        env::split_paths(&paths).any(|dir| dir.join(LAUNCHER).is_file())
    }

    /// Hand the folder path to the file manager and return once the launch
    /// has been requested.
    pub fn open(path: &Path) -> Result<(), DispatchError> {
        log::debug!("launching {LAUNCHER} for {}", path.display());
        Command::new(LAUNCHER)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|e| DispatchError {
                reason: format!("failed to launch {LAUNCHER}: {e}"),
            })
    }
}
