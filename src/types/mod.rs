pub mod accounts;
pub mod content;

pub use accounts::{AddPointsRequest, CredentialsRequest, MessageResponse};
pub use content::{NewSentence, OkMessage, RandomSentenceQuery, SaveDialogue};
