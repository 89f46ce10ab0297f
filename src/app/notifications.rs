use serde::Serialize;
use serde_json::error::Category;
use serde_json::Value;
use thiserror::Error;

use crate::domain::notification::Notification;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("malformed JSON: {0}")]
    Syntax(serde_json::Error),

    #[error("invalid notification: {0}")]
    Shape(serde_json::Error),

    #[error("expected a JSON array of notifications")]
    NotAnArray,

    #[error("batch of {len} notifications exceeds the limit of {max}")]
    BatchTooLarge { len: usize, max: usize },

    #[error("failed to encode notification: {0}")]
    Encode(serde_json::Error),
}

impl NotificationError {
    fn from_decode(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Shape(err),
            Category::Syntax | Category::Eof | Category::Io => Self::Syntax(err),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchItemError {
    pub index: usize,
    pub error: String,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchOutcome {
    pub items: Vec<Notification>,
    pub errors: Vec<BatchItemError>,
}

#[derive(Clone, Debug)]
pub struct NotificationService {
    batch_max_items: usize,
}

impl NotificationService {
    pub fn new(batch_max_items: usize) -> Self {
        Self { batch_max_items }
    }

    pub fn parse(&self, bytes: &[u8]) -> Result<Notification, NotificationError> {
        serde_json::from_slice(bytes).map_err(NotificationError::from_decode)
    }

    /// Validates every element of a JSON array independently.
    ///
    /// Only a body that is not an array, or is larger than the batch limit,
    /// fails as a whole.
    pub fn parse_batch(&self, bytes: &[u8]) -> Result<BatchOutcome, NotificationError> {
        let value: Value = serde_json::from_slice(bytes).map_err(NotificationError::from_decode)?;
        let Value::Array(elements) = value else {
            return Err(NotificationError::NotAnArray);
        };
        if elements.len() > self.batch_max_items {
            return Err(NotificationError::BatchTooLarge {
                len: elements.len(),
                max: self.batch_max_items,
            });
        }

        let mut outcome = BatchOutcome::default();
        for (index, element) in elements.into_iter().enumerate() {
            match serde_json::from_value::<Notification>(element) {
                Ok(notification) => outcome.items.push(notification),
                Err(err) => outcome.errors.push(BatchItemError {
                    index,
                    error: NotificationError::from_decode(err).to_string(),
                }),
            }
        }

        Ok(outcome)
    }

    pub fn encode(&self, notification: &Notification) -> Result<Vec<u8>, NotificationError> {
        serde_json::to_vec(notification).map_err(NotificationError::Encode)
    }
}
