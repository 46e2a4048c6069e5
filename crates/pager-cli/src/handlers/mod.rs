pub mod nav;
pub mod pages;
pub mod range;
