//! src/error.rs

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Transport-level failures retrieving the source text. These are logged and
/// surfaced to the caller as absent content, never as a panic.
#[derive(thiserror::Error)]
pub enum FetchError {
    #[error("failed to request {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl std::fmt::Debug for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

/// Source-folder validation failures for the file organizer.
#[derive(thiserror::Error)]
pub enum OrganizeError {
    #[error("source folder does not exist: {}", .0.display())]
    Missing(std::path::PathBuf),
    #[error("source is not a directory: {}", .0.display())]
    NotADirectory(std::path::PathBuf),
}

impl std::fmt::Debug for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}
