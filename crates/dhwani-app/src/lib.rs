pub mod app;
pub mod components;
pub mod net;
pub mod state;
