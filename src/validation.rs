//! Input validation for scheduling runs.
//!
//! Checks the structural integrity of doctor and patient records before a
//! run starts. Detects:
//! - Duplicate doctor names / patient IDs
//! - Free-slot entries outside the planning horizon
//! - Non-positive visit durations
//!
//! Domain infeasibility — a patient with no matching specialist, no free
//! slots, or a negative priority — is deliberately NOT a validation error:
//! the optimizer encodes it as an absent assignment.

use std::collections::HashSet;

use crate::models::{Doctor, Patient, TOTAL_SLOTS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same identifier.
    DuplicateId,
    /// A free-slot entry lies outside `[0, TOTAL_SLOTS)`.
    SlotOutOfRange,
    /// A visit duration that rounds to zero or fewer slot-units.
    InvalidDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates doctor and patient records.
///
/// Collects all detected issues rather than stopping at the first.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` otherwise.
pub fn validate_input(doctors: &[Doctor], patients: &[Patient]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut doctor_names = HashSet::new();
    for doc in doctors {
        if !doctor_names.insert(doc.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate doctor name: {}", doc.name),
            ));
        }
        for &slot in &doc.free_slots {
            if slot >= TOTAL_SLOTS {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SlotOutOfRange,
                    format!("Doctor '{}' has free slot {slot} outside the horizon", doc.name),
                ));
            }
        }
    }

    let mut patient_ids = HashSet::new();
    for patient in patients {
        if !patient_ids.insert(patient.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate patient ID: {}", patient.id),
            ));
        }
        for &slot in &patient.free_slots {
            if slot >= TOTAL_SLOTS {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SlotOutOfRange,
                    format!(
                        "Patient '{}' has free slot {slot} outside the horizon",
                        patient.id
                    ),
                ));
            }
        }
        if patient.duration_slots() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Patient '{}' duration {} min rounds to zero slots",
                    patient.id, patient.duration_min
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
