pub mod accounts;
pub mod content;
pub mod probe;
