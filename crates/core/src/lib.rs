// jobq Core - Queue registry facade, domain types and the gateway port
// NO transport dependencies: the gateway is injected

pub mod application;
pub mod domain;
pub mod error;
pub mod port;
pub mod protocol;

pub use application::{Jobs, Queue};
pub use error::{JobsError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
