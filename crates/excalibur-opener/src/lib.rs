pub mod dispatch;
pub mod locator;
pub mod platform;
pub mod storage;

// Re-export key types for easier usage
pub use dispatch::{DispatchError, DocumentViewer, FolderOpener, OpenFolderError, OpenedFolder};
pub use locator::DocumentLocator;
pub use platform::SystemViewer;
pub use storage::{APP_FOLDER_NAME, app_folder_path, ensure_app_folder};
