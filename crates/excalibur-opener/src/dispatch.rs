use std::io;
use std::path::PathBuf;

use serde::Serialize;

use crate::locator::DocumentLocator;
use crate::storage;

/// Failure raised by a viewer when the platform rejects the launch request.
#[derive(Debug, thiserror::Error)]
#[error("view request dispatch failed: {reason}")]
pub struct DispatchError {
    pub reason: String,
}

/// The two failure exits of the folder-open operation.
#[derive(Debug, thiserror::Error)]
pub enum OpenFolderError {
    /// The target folder could not be created on shared storage. The
    /// underlying IO error is attached as the source for host-side
    /// diagnostics; the display string is the fixed contract message.
    #[error("Failed to create folder")]
    FolderCreation(#[source] io::Error),
    /// No installed application can view the folder, or the launch request
    /// failed at dispatch time despite a handler being found.
    #[error("No app found to open a folder")]
    NoHandler,
}

/// Success payload of [`FolderOpener::open_documents_folder`].
///
/// `opened` is always `true` on the success path; failures are reported as
/// errors, never as a false-valued success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenedFolder {
    pub opened: bool,
}

/// Capability query and launch seam over the platform's folder-viewing
/// mechanism.
///
/// `can_handle` asks whether any installed application can view the locator;
/// `invoke` presents the chooser and launches the user's selection. Keeping
/// the seam this narrow lets the folder-ensure and locator logic run
/// unmodified in tests with a fake viewer.
pub trait DocumentViewer {
    fn can_handle(&self, locator: &DocumentLocator) -> bool;
    fn invoke(&self, locator: &DocumentLocator) -> Result<(), DispatchError>;
}

/// Opens the app's shared Documents folder in a file explorer chosen by the
/// user.
pub struct FolderOpener<V> {
    documents_root: PathBuf,
    viewer: V,
}

impl<V: DocumentViewer> FolderOpener<V> {
    /// `documents_root` is the shared public Documents directory the app
    /// folder lives under; `viewer` performs the platform dispatch.
    pub fn new(documents_root: impl Into<PathBuf>, viewer: V) -> Self {
        Self {
            documents_root: documents_root.into(),
            viewer,
        }
    }

    /// Ensure the app folder exists, then ask the platform to present a
    /// chooser of applications able to display it.
    ///
    /// Safe to call repeatedly: the folder is created at most once, and the
    /// locator and handler availability are re-derived on every call. The
    /// call returns as soon as the launch has been requested; it does not
    /// wait for the launched application to exit.
    pub fn open_documents_folder(&self) -> Result<OpenedFolder, OpenFolderError> {
        log::debug!("open_documents_folder() called");

        let target = storage::ensure_app_folder(&self.documents_root).map_err(|e| {
            log::error!("failed to create app documents folder: {e}");
            OpenFolderError::FolderCreation(e)
        })?;

        let locator = DocumentLocator::for_app_folder(&target);

        if self.viewer.can_handle(&locator) {
            match self.viewer.invoke(&locator) {
                Ok(()) => return Ok(OpenedFolder { opened: true }),
                // Treated the same as finding no handler at all: the
                // platform claimed an app could help and then refused.
                Err(e) => log::error!("handler found but dispatch failed: {e}"),
            }
        }

        log::error!("no app found to open a folder");
        Err(OpenFolderError::NoHandler)
    }
}
