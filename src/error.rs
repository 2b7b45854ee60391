use thiserror::Error;

/// Everything that can abort a conversion run. All variants are fatal:
/// no partial store is ever handed to serialization.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("input has {count} non-empty lines, not a multiple of 3")]
    UnevenRecords { count: usize },

    #[error("line {index}: \"{text}\" is shorter than its {prefix}-byte role prefix")]
    ShortLine {
        index: usize,
        prefix: usize,
        text: String,
    },

    #[error("state pair \"{pair}\" has no `=`")]
    MissingEquals { pair: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
