//! Schedule state (candidate solution) model.
//!
//! A [`ScheduleState`] is one proposed schedule: an assignment-or-absent per
//! patient, index-aligned with the patient list. States are value objects —
//! the search driver creates, scores, and discards them freely; they hold no
//! back-references to doctors or patients and clone without aliasing hazards.

use serde::{Deserialize, Serialize};

/// A single patient's placement: a slot and the doctor serving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Flat slot index of the visit's first slot.
    pub slot: usize,
    /// Name of the assigned doctor.
    pub doctor: String,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(slot: usize, doctor: impl Into<String>) -> Self {
        Self {
            slot,
            doctor: doctor.into(),
        }
    }
}

/// A full candidate schedule.
///
/// `assignments[i]` is patient `i`'s placement, or `None` when the patient is
/// unscheduled. The index alignment with the patient list is an invariant:
/// operators never reorder or resize a state independently of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleState {
    /// One entry per patient.
    pub assignments: Vec<Option<Assignment>>,
}

impl ScheduleState {
    /// Creates a state from per-patient assignments.
    pub fn new(assignments: Vec<Option<Assignment>>) -> Self {
        Self { assignments }
    }

    /// Number of patient entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the state has no entries at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of patients with a present assignment.
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_some()).count()
    }
}

impl FromIterator<Option<Assignment>> for ScheduleState {
    fn from_iter<I: IntoIterator<Item = Option<Assignment>>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigned_count() {
        let state = ScheduleState::new(vec![
            Some(Assignment::new(3, "Anna")),
            None,
            Some(Assignment::new(40, "Ben")),
        ]);
        assert_eq!(state.len(), 3);
        assert_eq!(state.assigned_count(), 2);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_empty_state() {
        let state = ScheduleState::default();
        assert!(state.is_empty());
        assert_eq!(state.assigned_count(), 0);
    }

    #[test]
    fn test_states_compare_by_assignments() {
        let a = ScheduleState::new(vec![Some(Assignment::new(3, "Anna")), None]);
        let b = a.clone();
        assert_eq!(a, b);
    }
}
