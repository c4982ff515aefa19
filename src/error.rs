use std::path::PathBuf;

/// Fatal errors. Any of these aborts the run with a non-zero exit; the
/// output file keeps whatever rows were flushed before the failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no git repository found at {path:?}")]
    RepositoryNotFound { path: PathBuf },

    #[error("git backend failure: {0}")]
    Git(#[from] git2::Error),

    #[error("output failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Per-file extraction failures. These never abort the run: `Parse` means
/// the file version contributes zero units, `UnresolvedName` means one
/// unit is skipped while its siblings are still emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("no usable syntax tree could be produced")]
    Parse,

    #[error("type declaration has no resolvable name")]
    UnresolvedName,
}
