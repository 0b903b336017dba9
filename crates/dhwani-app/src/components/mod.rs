pub mod header;
pub mod language_selector;
pub mod result;
pub mod translate_button;
pub mod upload;
