use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the app-owned subfolder under the shared Documents directory.
pub const APP_FOLDER_NAME: &str = "Excalibur";

/// Absolute path of the app folder under `documents_root`.
pub fn app_folder_path(documents_root: &Path) -> PathBuf {
    documents_root.join(APP_FOLDER_NAME)
}

/// Make sure the app folder exists, creating it (and any missing parents) on
/// first use.
///
/// A folder that already exists is left untouched — this module only ever
/// creates the folder, it never deletes or modifies it. Concurrent callers
/// are safe: `create_dir_all` treats a folder that appeared between the
/// check and the create as success.
pub fn ensure_app_folder(documents_root: &Path) -> io::Result<PathBuf> {
    let target = app_folder_path(documents_root);
    if !target.exists() {
        log::debug!("app documents folder does not yet exist... creating it");
        fs::create_dir_all(&target)?;
    }
    log::debug!("app documents folder: {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_folder_on_first_use() {
        let root = TempDir::new().unwrap();

        let target = ensure_app_folder(root.path()).unwrap();

        assert_eq!(target, root.path().join("Excalibur"));
        assert!(target.is_dir());
    }

    #[test]
    fn existing_folder_is_left_alone() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("Excalibur");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("vault.exef"), b"sealed").unwrap();

        ensure_app_folder(root.path()).unwrap();

        let entries: Vec<_> = fs::read_dir(&target)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["vault.exef"]);
        assert_eq!(fs::read(target.join("vault.exef")).unwrap(), b"sealed");
    }

    #[test]
    fn creates_missing_parent_segments() {
        let root = TempDir::new().unwrap();
        let nested_root = root.path().join("storage").join("Documents");

        let target = ensure_app_folder(&nested_root).unwrap();

        assert!(target.is_dir());
        assert_eq!(target, nested_root.join("Excalibur"));
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let root = TempDir::new().unwrap();

        let first = ensure_app_folder(root.path()).unwrap();
        let second = ensure_app_folder(root.path()).unwrap();

        assert_eq!(first, second);
        assert!(second.is_dir());
    }

    #[test]
    fn fails_when_root_cannot_hold_a_folder() {
        let root = TempDir::new().unwrap();
        let blocked_root = root.path().join("not-a-directory");
        fs::write(&blocked_root, b"plain file").unwrap();

        let result = ensure_app_folder(&blocked_root);

        assert!(result.is_err());
    }
}
