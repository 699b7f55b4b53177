use std::path::PathBuf;

/// Convenient alias used by fallible operations across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed source preserving the underlying parser or IO failure.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Fatal failures terminating a migration run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source path did not resolve to anything on disk.
    #[error("source file `{path}` does not exist")]
    SourceMissing { path: PathBuf },
    /// Source path resolved to a directory or another non-regular file.
    #[error("source path `{path}` is not a regular file")]
    SourceNotFile { path: PathBuf },
    /// Input file could not be opened or parsed as RDF.
    #[error("failed to load ontology from `{path}`: {source}")]
    Load { path: PathBuf, source: BoxedSource },
    /// Output file could not be written.
    #[error("failed to save ontology to `{path}`: {source}")]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },
}
