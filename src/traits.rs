use serde::Serialize;
use std::fmt;

/// A record the CRUD scaffold can list, view, edit and delete.
///
/// The scaffold never interprets fields beyond the identifier; columns read
/// values by field name from the serialized record, so `Serialize` is the only
/// other requirement.
pub trait Entity: Clone + Serialize {
    /// Stable unique identifier, used as the deletion key
    type Id: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Returns the record identifier
    fn id(&self) -> Self::Id;
}

/// An entity that can be edited through a form.
///
/// The form edits a `Draft` buffer (usually text fields) which is converted
/// back into a record on submit.
pub trait FormModel: Entity {
    type Draft: Clone;

    /// Builds the form buffer. `None` gives the empty create form.
    fn to_draft(item: Option<&Self>) -> Self::Draft;

    /// Converts a submitted draft into a record.
    ///
    /// `original` is the record being edited; implementations keep its
    /// identity. For a create form it is `None` and the caller assigns the id.
    fn from_draft(draft: &Self::Draft, original: Option<&Self>) -> Result<Self, FormError>;
}

/// Validation failures raised while converting a form draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} must be a number (got '{value}')")]
    InvalidNumber { field: &'static str, value: String },
    #[error("'{value}' is not a valid {field}")]
    InvalidChoice { field: &'static str, value: String },
}

/// How a mutation callback finished.
#[derive(Debug)]
pub enum Completion {
    /// Finished during the call
    Ready(anyhow::Result<()>),
    /// Running elsewhere; the result arrives later through `CrudState::settle`
    Deferred,
}

impl Completion {
    pub fn ok() -> Self {
        Completion::Ready(Ok(()))
    }
}

impl From<anyhow::Result<()>> for Completion {
    fn from(result: anyhow::Result<()>) -> Self {
        Completion::Ready(result)
    }
}

/// Callbacks a page hands to the CRUD scaffold.
///
/// Every callback is optional; the defaults do nothing and report success.
pub trait CrudHandler<T: Entity> {
    /// Search text changed. The scaffold never filters rows itself.
    fn search(&mut self, _query: &str) {}

    /// Create a record from a submitted create form.
    fn add(&mut self, _item: T) -> Completion {
        Completion::ok()
    }

    /// Replace a record from a submitted edit form.
    fn update(&mut self, _item: T) -> Completion {
        Completion::ok()
    }

    /// Delete the record with the given id.
    fn delete(&mut self, _id: T::Id) -> Completion {
        Completion::ok()
    }
}
