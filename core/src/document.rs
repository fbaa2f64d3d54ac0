use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("document record must be a JSON object")]
    NotAnObject,
    #[error("document record has no `id`")]
    MissingId,
    #[error("document `id` must be a string")]
    InvalidId,
    #[error("document {id:?} has no `text`")]
    MissingText { id: String },
    #[error("document {id:?} has a non-string `text`")]
    InvalidText { id: String },
}

/// A caller-owned `{id, text}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }

    /// Validate an untyped record. Extra fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        let obj = value.as_object().ok_or(DocumentError::NotAnObject)?;
        let id = match obj.get("id") {
            None => return Err(DocumentError::MissingId),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(DocumentError::InvalidId),
        };
        let text = match obj.get("text") {
            None | Some(Value::Null) => return Err(DocumentError::MissingText { id }),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(DocumentError::InvalidText { id }),
        };
        Ok(Self { id, text })
    }
}
