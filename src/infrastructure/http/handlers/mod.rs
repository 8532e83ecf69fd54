//! HTTP Handlers

mod book;
mod passage;
mod ping;
mod version;

pub use book::*;
pub use passage::*;
pub use ping::*;
pub use version::*;
