use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::upload::StoredImage;
use crate::domain::ports::ImageStore;
use crate::error::AppError;

pub struct FsImageStore {
    root: PathBuf,
    public_base_url: String,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: String) -> Self {
        Self {
            root: root.into(),
            public_base_url,
        }
    }

    fn extension_for(original_name: &str, content_type: &str) -> String {
        Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .or_else(|| content_type.strip_prefix("image/").map(str::to_string))
            .unwrap_or_else(|| "bin".to_string())
    }

    // Generated names never contain separators; anything that does is an
    // attempt to escape the upload directory.
    fn check_filename(filename: &str) -> Result<(), AppError> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(AppError::Validation("invalid filename".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn store(
        &self,
        original_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<StoredImage, AppError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::InternalWithMsg(format!("failed to create upload dir: {e}")))?;

        let filename = format!(
            "{}.{}",
            Uuid::new_v4(),
            Self::extension_for(original_name, content_type)
        );
        let path = self.root.join(&filename);

        fs::write(&path, data)
            .await
            .map_err(|e| AppError::InternalWithMsg(format!("failed to write {filename}: {e}")))?;

        info!("Stored upload {} ({} bytes)", filename, data.len());

        Ok(StoredImage {
            url: format!("{}/uploads/{}", self.public_base_url, filename),
            filename,
            original_name: original_name.to_string(),
            size: data.len() as u64,
        })
    }

    async fn delete(&self, filename: &str) -> Result<(), AppError> {
        Self::check_filename(filename)?;

        let path = self.root.join(filename);
        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted upload {}", filename);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::NotFound("File not found".into()))
            }
            Err(e) => Err(AppError::InternalWithMsg(format!(
                "failed to delete {filename}: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FsImageStore {
        FsImageStore::new(dir.path(), "http://localhost:3000".to_string())
    }

    #[tokio::test]
    async fn store_writes_file_and_builds_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let stored = store
            .store("beach.JPG", "image/jpeg", b"fake image bytes")
            .await
            .unwrap();

        assert!(stored.filename.ends_with(".jpg"));
        assert_eq!(stored.original_name, "beach.JPG");
        assert_eq!(stored.size, 16);
        assert_eq!(
            stored.url,
            format!("http://localhost:3000/uploads/{}", stored.filename)
        );
        assert!(dir.path().join(&stored.filename).exists());
    }

    #[tokio::test]
    async fn extension_falls_back_to_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let stored = store.store("photo", "image/png", b"data").await.unwrap();
        assert!(stored.filename.ends_with(".png"));
    }

    #[tokio::test]
    async fn delete_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let err = store.delete("does-not-exist.png").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.delete("../secrets.txt").await.unwrap_err(),
            AppError::Validation(_)
        ));
        assert!(matches!(
            store.delete("a/b.png").await.unwrap_err(),
            AppError::Validation(_)
        ));
    }
}
