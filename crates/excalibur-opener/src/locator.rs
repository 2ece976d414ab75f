use std::path::{Path, PathBuf};

use crate::storage::APP_FOLDER_NAME;

/// Authority of the external-storage documents provider that owns the
/// shared Documents tree.
pub const EXTERNAL_STORAGE_AUTHORITY: &str = "com.android.externalstorage.documents";

/// Storage-provider-scoped identifier for the app folder.
///
/// This is not a filesystem path: it is the opaque document id the
/// platform's documents framework uses to reference the folder across
/// applications. It is re-derived on every invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocator {
    document_id: String,
    path: PathBuf,
}

impl DocumentLocator {
    /// Derive the locator for the app folder backed by `path`.
    ///
    /// The document id is always `primary:Documents/Excalibur`, regardless
    /// of where the backing path actually lives — tests redirect the root to
    /// a temp directory without changing the id the chooser sees.
    pub fn for_app_folder(path: &Path) -> Self {
        Self {
            document_id: format!("primary:Documents/{APP_FOLDER_NAME}"),
            path: path.to_path_buf(),
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Filesystem path the locator was derived for.
    ///
    /// Only fallback viewers use this; the documents framework goes through
    /// [`DocumentLocator::to_document_uri`] instead.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full content URI form understood by the documents framework.
    pub fn to_document_uri(&self) -> String {
        format!(
            "content://{}/document/{}",
            EXTERNAL_STORAGE_AUTHORITY,
            urlencoding::encode(&self.document_id)
        )
    }
}
