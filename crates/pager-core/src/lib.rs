pub mod config;
pub mod error;
pub mod navigator;
pub mod pagination;
pub mod result;

pub use config::PagerConfig;
pub use error::PagerError;
pub use navigator::{validate, PageNavigator, PageView};
pub use pagination::{
    compute_default_range, compute_range, render_labels, total_pages_for, total_slots,
    RangeToken, DEFAULT_SIBLING_COUNT, ELLIPSIS,
};
pub use result::PagerResult;
