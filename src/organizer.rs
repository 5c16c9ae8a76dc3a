//! src/organizer.rs
use crate::error::OrganizeError;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// What happened during a walk. Per-file failures never abort the run, so
/// both counters can be non-zero at once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrganizeSummary {
    copied: u64,
    failed: u64,
}

impl OrganizeSummary {
    pub fn copied(&self) -> u64 {
        self.copied
    }

    pub fn failed(&self) -> u64 {
        self.failed
    }
}

/// Copies every file under a source tree into per-extension buckets beneath
/// the output root. Files without an extension land in `misc`.
pub struct FileOrganizer {
    output_root: PathBuf,
}

impl FileOrganizer {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    #[tracing::instrument(
        name = "Organize folder",
        skip(self),
        fields(output = %self.output_root.display())
    )]
    pub async fn organize(&self, source: &Path) -> Result<OrganizeSummary, OrganizeError> {
        let metadata = tokio::fs::metadata(source)
            .await
            .map_err(|_| OrganizeError::Missing(source.to_path_buf()))?;
        if !metadata.is_dir() {
            return Err(OrganizeError::NotADirectory(source.to_path_buf()));
        }

        let mut summary = OrganizeSummary::default();
        let mut pending = vec![source.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(error) => {
                    tracing::error!(?error, dir = %dir.display(), "Failed to read directory");
                    summary.failed += 1;
                    continue;
                }
            };

            loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(error) => {
                        tracing::error!(?error, dir = %dir.display(), "Failed to read directory entry");
                        summary.failed += 1;
                        break;
                    }
                };

                let path = entry.path();
                let file_type = match entry.file_type().await {
                    Ok(file_type) => file_type,
                    Err(error) => {
                        tracing::error!(?error, file = %path.display(), "Failed to read file type");
                        summary.failed += 1;
                        continue;
                    }
                };

                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file() {
                    match self.copy_file(&path).await {
                        Ok(destination) => {
                            tracing::info!(
                                from = %path.display(),
                                to = %destination.display(),
                                "Copied file"
                            );
                            summary.copied += 1;
                        }
                        Err(error) => {
                            tracing::error!(?error, file = %path.display(), "Failed to copy file");
                            summary.failed += 1;
                        }
                    }
                }
            }
        }

        Ok(summary)
    }

    /// The bucket directory is created before the copy.
    async fn copy_file(&self, path: &Path) -> Result<PathBuf, anyhow::Error> {
        let bucket = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if !ext.is_empty() => ext.to_lowercase(),
            _ => "misc".to_string(),
        };
        let destination_dir = self.output_root.join(bucket);
        tokio::fs::create_dir_all(&destination_dir)
            .await
            .context("Failed to create destination directory")?;

        let file_name = path.file_name().context("File has no name")?;
        let destination = destination_dir.join(file_name);
        tokio::fs::copy(path, &destination)
            .await
            .context("Failed to copy file to destination")?;
        Ok(destination)
    }
}
