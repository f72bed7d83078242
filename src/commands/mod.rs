pub mod config;
pub mod expand;
pub mod preview;
pub mod prompt;
pub mod suggest;
pub mod summary;
