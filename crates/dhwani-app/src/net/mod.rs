pub mod fetch;
pub mod file;
