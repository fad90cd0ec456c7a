//! Patient model.
//!
//! Patients are immutable inputs to a scheduling run: identity, required
//! specialty, a priority weight, a visit duration, and the slots the patient
//! is personally available for. A negative priority marks the patient as
//! unschedulable; the optimizer represents that as an absent assignment, not
//! an error.

use serde::{Deserialize, Serialize};

use super::timetable::SLOT_MINUTES;

fn default_priority() -> i32 {
    1
}

fn default_duration() -> i64 {
    SLOT_MINUTES
}

/// A patient requesting an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Unique patient identifier.
    pub id: String,
    /// Required doctor specialty.
    pub specialty: String,
    /// Scheduling weight; higher is served earlier, negative is unschedulable.
    #[serde(default = "default_priority")]
    pub priority: i32,
    /// Visit length in minutes, rounded down to whole slot-units.
    #[serde(default = "default_duration")]
    pub duration_min: i64,
    /// Slots the patient is available for.
    #[serde(default)]
    pub free_slots: Vec<usize>,
}

impl Patient {
    /// Creates a patient with default priority and a one-slot visit.
    pub fn new(id: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            specialty: specialty.into(),
            priority: default_priority(),
            duration_min: default_duration(),
            free_slots: Vec::new(),
        }
    }

    /// Sets the priority weight.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the visit duration in minutes.
    pub fn with_duration_min(mut self, duration_min: i64) -> Self {
        self.duration_min = duration_min;
        self
    }

    /// Sets the candidate free slots.
    pub fn with_free_slots(mut self, slots: impl IntoIterator<Item = usize>) -> Self {
        self.free_slots = slots.into_iter().collect();
        self
    }

    /// Visit length as a whole number of slot-units.
    ///
    /// Rounds down; a visit shorter than one slot occupies no slots.
    #[inline]
    pub fn duration_slots(&self) -> usize {
        (self.duration_min / SLOT_MINUTES).max(0) as usize
    }

    /// Whether the patient can be scheduled at all.
    pub fn is_schedulable(&self) -> bool {
        self.priority >= 0 && !self.free_slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_builder() {
        let p = Patient::new("P1", "GP")
            .with_priority(5)
            .with_duration_min(30)
            .with_free_slots([10, 11, 12]);
        assert_eq!(p.id, "P1");
        assert_eq!(p.specialty, "GP");
        assert_eq!(p.priority, 5);
        assert_eq!(p.duration_slots(), 2);
        assert_eq!(p.free_slots, vec![10, 11, 12]);
    }

    #[test]
    fn test_duration_rounding() {
        assert_eq!(Patient::new("P1", "GP").duration_slots(), 1); // default 15 min
        assert_eq!(
            Patient::new("P1", "GP").with_duration_min(44).duration_slots(),
            2
        );
        assert_eq!(
            Patient::new("P1", "GP").with_duration_min(10).duration_slots(),
            0
        );
        assert_eq!(
            Patient::new("P1", "GP").with_duration_min(-15).duration_slots(),
            0
        );
    }

    #[test]
    fn test_is_schedulable() {
        let p = Patient::new("P1", "GP").with_free_slots([1]);
        assert!(p.is_schedulable());
        assert!(!p.clone().with_priority(-1).is_schedulable());
        assert!(!Patient::new("P2", "GP").is_schedulable()); // no free slots
    }

    #[test]
    fn test_patient_record_deserialization() {
        let p: Patient =
            serde_json::from_str(r#"{"id":"P7","specialty":"Cardio","free_slots":[3,4]}"#).unwrap();
        assert_eq!(p.priority, 1);
        assert_eq!(p.duration_min, 15);
        assert_eq!(p.free_slots, vec![3, 4]);
    }
}
