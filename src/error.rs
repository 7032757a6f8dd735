use thiserror::Error;

/// Defines errors that may occur while expanding a translation template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Error when a placeholder references an argument that was not supplied
    #[error("placeholder {{{index}}} has no matching argument ({supplied} supplied)")]
    ArgumentMismatch { index: usize, supplied: usize },
    /// Error when a placeholder is not a plain positional index
    #[error("invalid placeholder '{{{0}}}'")]
    InvalidPlaceholder(String),
    /// Error when a brace is not closed or escaped
    #[error("unbalanced brace in template")]
    UnbalancedBrace,
}
