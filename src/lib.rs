pub mod api;
pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod output;
pub mod render;
pub mod rounds;
pub mod scoring;
pub mod session;
pub mod stderr_buffer;
pub mod tui;
pub mod words;

pub use error::PracticeError;
