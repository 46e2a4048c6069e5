use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("Invalid page size: must be at least 1")]
    InvalidPageSize,

    #[error("No pages: total page count must be at least 1")]
    NoPages,

    #[error("Page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
