//! Project intake use-case.
//!
//! # Responsibility
//! - Apply the board's field policy to raw form values.
//! - Create the project through the shared store only when every field
//!   passes.
//!
//! # Invariants
//! - A rejected draft leaves the store untouched and notifies no one.
//! - The store itself performs no validation; this service is the only
//!   creation path that applies the policy.

use crate::model::project::ProjectId;
use crate::model::validation::{first_violation, FieldRules, FieldValue, FieldViolation};
use crate::store::handle::{SharedProjectStore, StoreAccessError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum raw length of a project description.
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
/// Inclusive headcount bounds for a project.
pub const PEOPLE_MIN: u32 = 1;
pub const PEOPLE_MAX: u32 = 5;

/// Raw field values gathered by the form collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Why a draft was rejected, naming the offending field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntakeError {
    InvalidTitle(FieldViolation),
    InvalidDescription(FieldViolation),
    InvalidPeople(FieldViolation),
    /// Submission attempted from inside a listener notification.
    Store(StoreAccessError),
}

impl Display for IntakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(violation) => write!(f, "invalid title: {violation}"),
            Self::InvalidDescription(violation) => {
                write!(f, "invalid description: {violation}")
            }
            Self::InvalidPeople(violation) => write!(f, "invalid people count: {violation}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for IntakeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTitle(violation)
            | Self::InvalidDescription(violation)
            | Self::InvalidPeople(violation) => Some(violation),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreAccessError> for IntakeError {
    fn from(value: StoreAccessError) -> Self {
        Self::Store(value)
    }
}

/// Checks a draft against the board's field policy without touching the
/// store: title required, description required with a minimum length,
/// people within the inclusive headcount bounds.
pub fn check_draft(draft: &ProjectDraft) -> Result<(), IntakeError> {
    let title_rules = FieldRules {
        required: true,
        ..FieldRules::default()
    };
    if let Some(violation) = first_violation(FieldValue::Text(&draft.title), &title_rules) {
        return Err(IntakeError::InvalidTitle(violation));
    }

    let description_rules = FieldRules {
        required: true,
        min_length: Some(DESCRIPTION_MIN_LENGTH),
        ..FieldRules::default()
    };
    if let Some(violation) =
        first_violation(FieldValue::Text(&draft.description), &description_rules)
    {
        return Err(IntakeError::InvalidDescription(violation));
    }

    let people_rules = FieldRules {
        required: true,
        min: Some(f64::from(PEOPLE_MIN)),
        max: Some(f64::from(PEOPLE_MAX)),
        ..FieldRules::default()
    };
    let people_value = FieldValue::Number(f64::from(draft.people));
    if let Some(violation) = first_violation(people_value, &people_rules) {
        return Err(IntakeError::InvalidPeople(violation));
    }

    Ok(())
}

/// Use-case service turning accepted drafts into board projects.
pub struct ProjectIntake {
    store: SharedProjectStore,
}

impl ProjectIntake {
    /// Creates the service over the shared store handle.
    pub fn new(store: SharedProjectStore) -> Self {
        Self { store }
    }

    /// Validates a draft and, on acceptance, creates the project.
    ///
    /// # Contract
    /// - Returns the new project's stable id on success.
    /// - A policy violation names the offending field; the store is not
    ///   called.
    pub fn submit(&self, draft: &ProjectDraft) -> Result<ProjectId, IntakeError> {
        check_draft(draft)?;
        let id = self
            .store
            .add_project(draft.title.as_str(), draft.description.as_str(), draft.people)?;
        Ok(id)
    }
}
