//! Expense record and the request candidate it is built from
//!
//! Inbound bodies are decoded into a loose payload first (every field
//! optional), then checked, so a missing title is reported as an invalid
//! field rather than a decode failure.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Store-assigned expense identifier (`BIGSERIAL`)
pub type ExpenseId = i64;

/// A persisted expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

impl Expense {
    /// Attach an id to a validated candidate.
    pub fn from_draft(id: ExpenseId, draft: ExpenseDraft) -> Self {
        Self {
            id,
            title: draft.title,
            amount: draft.amount,
            note: draft.note,
            tags: draft.tags,
        }
    }
}

/// Expense fields without an id, as written by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

/// Wire shape of a create/update body. Any `id` key is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExpensePayload {
    title: Option<String>,
    amount: Option<f64>,
    note: Option<String>,
    tags: Option<Vec<String>>,
}

impl From<ExpensePayload> for ExpenseDraft {
    fn from(p: ExpensePayload) -> Self {
        Self {
            title: p.title.unwrap_or_default(),
            amount: p.amount.unwrap_or_default(),
            note: p.note.unwrap_or_default(),
            tags: p.tags.unwrap_or_default(),
        }
    }
}

impl ExpenseDraft {
    /// Decode and validate a raw request body.
    ///
    /// # Errors
    ///
    /// `Malformed` if the bytes are not a JSON object of the expected shape,
    /// `Empty`/`Zero` if `title` is empty or `amount` is zero.
    ///
    /// # Example
    /// ```
    /// use expensectl_server::models::ExpenseDraft;
    ///
    /// let draft = ExpenseDraft::from_json(br#"{"title":"tea","amount":45}"#).unwrap();
    /// assert_eq!(draft.title, "tea");
    /// assert!(draft.tags.is_empty());
    ///
    /// assert!(ExpenseDraft::from_json(br#"{"title":"tea","amount":0}"#).is_err());
    /// ```
    pub fn from_json(bytes: &[u8]) -> Result<Self, ValidationError> {
        let payload: ExpensePayload =
            serde_json::from_slice(bytes).map_err(|e| ValidationError::Malformed {
                reason: e.to_string(),
            })?;

        let draft = Self::from(payload);
        draft.validate()?;
        Ok(draft)
    }

    /// Check the fields that must be set before any write.
    ///
    /// Tags are not inspected: empty lists and duplicates are accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if self.amount == 0.0 {
            return Err(ValidationError::Zero { field: "amount" });
        }

        Ok(())
    }
}
