pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod telemetry;
pub mod types;

pub use error::{ContentFault, TaaltorenError};
