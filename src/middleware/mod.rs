pub mod admin;
pub mod json_body;

pub use admin::{AdminAuth, RequireAdmin};
pub use json_body::{JsonBody, JsonOrDefault};
