use thiserror::Error;

/// All errors that the crate can generate. Malformed numbers and degenerate geometry are
/// never errors; they are absorbed into the layout (see [`GuideConfig`](crate::GuideConfig)).
#[derive(Error, Debug)]
pub enum GuideError {
    #[error("unknown page size `{0}` (expected one of Letter, Legal, Tabloid, A3, A4)")]
    /// The configured page size is not one of the supported names or indices
    UnknownPageSize(String),

    #[error("malformed override `{0}`, expected KEY=VALUE")]
    /// A command-line override did not have the `KEY=VALUE` shape
    MalformedOverride(String),

    #[error(transparent)]
    /// [toml] failed to parse the configuration file
    ConfigSyntax(#[from] toml::de::Error),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),
}
