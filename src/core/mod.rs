//! Core application primitives (server, scheduler, wiring)

pub mod bootstrap;
pub mod http;
pub mod scheduler;

pub use bootstrap::*;
pub use http::*;
pub use scheduler::*;
