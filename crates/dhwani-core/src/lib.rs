//! Core of the Dhwani audio translator: everything between "the user picked
//! a file" and "we have a result (or a reason we don't)". No browser types
//! live here; the app crate supplies the fetch transport and the file
//! reader at the seams defined in [`session`].

pub mod config;
pub mod error;
pub mod languages;
pub mod media;
pub mod protocol;
pub mod session;

pub use config::ClientConfig;
pub use error::{Result, TranslateError};
pub use media::{AudioFormat, MediaAsset};
pub use protocol::{TranslationRequest, TranslationResult};
pub use session::{Controller, Phase, Transport, TransportReply};
