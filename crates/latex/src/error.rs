use thiserror::Error;

#[derive(Debug, Error)]
pub enum LatexError {
    #[error("Wrap width must be at least 1, got {width}")]
    InvalidWrapWidth { width: usize },

    #[error("Alignment '{spec}' has {actual} columns but the table has {expected}")]
    AlignmentLengthMismatch {
        expected: usize,
        actual: usize,
        spec: String,
    },

    #[error("Invalid alignment code '{code}' in '{spec}' (expected l, c or r)")]
    InvalidAlignment { code: char, spec: String },

    #[error("Table has no columns")]
    NoColumns,

    #[error("Sheet error: {0}")]
    Sheet(#[from] xlsx2tex_sheet::SheetError),
}

pub type Result<T> = std::result::Result<T, LatexError>;
