use serde::{Deserialize, Serialize};

/// A single guestbook entry. Field names double as the persisted attribute
/// names and the JSON keys on the REST surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub uuid: String,
    pub message: String,
}

impl Message {
    pub fn new(uuid: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            message: message.into(),
        }
    }
}
