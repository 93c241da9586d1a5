use thiserror::Error;

/// Errors raised while reading ranges, dates and focus pointers from text
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid date '{0}'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS")]
    InvalidDate(String),

    #[error("Invalid range '{0}'. Use [KEY=]START..END (either side may be empty)")]
    InvalidRange(String),

    #[error("Invalid focus '{0}'. Use INDEX,start or INDEX,end")]
    InvalidFocus(String),

    #[error("Invalid boundary '{0}'. Expected 'start' or 'end'")]
    InvalidBoundary(String),

    #[error("Invalid input range '{0}'. Use LABEL=NUMBER")]
    InvalidInputRange(String),

    #[error("Duplicate range key '{0}'. Unkeyed ranges are named range1, range2, ...")]
    DuplicateKey(String),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
