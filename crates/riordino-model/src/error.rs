use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReorderError {
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("no valid rows after normalization (check numbers and headers)")]
    NoValidRows,
    #[error("invalid period: workdays must be positive, got {workdays}")]
    InvalidPeriod { workdays: i64 },
    #[error("invalid month: {month} (expected 1-12)")]
    InvalidMonth { month: u32 },
    #[error("invalid date: {year}-{month:02}")]
    InvalidDate { year: i32, month: u32 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReorderError>;
