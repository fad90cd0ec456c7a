//! Doctor model.
//!
//! A doctor is identified by name, carries a specialty tag, and has a weekly
//! availability derived from off-shift entries: every slot of every shift the
//! doctor is not off. Off-shifts and the free-slot set are fixed at
//! scheduling-session start (see [`crate::roster`]) and read-only during a
//! run, so candidate generation can filter through them without re-checking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::timetable::Shift;

/// A half-day during which a doctor takes no patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffShift {
    /// Day number (0 = Mon).
    pub day: usize,
    /// Half-day shift.
    pub shift: Shift,
}

impl OffShift {
    /// Creates an off-shift entry.
    pub fn new(day: usize, shift: Shift) -> Self {
        Self { day, shift }
    }
}

/// A doctor available for patient assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique doctor name.
    pub name: String,
    /// Specialty tag; patients are only assignable to matching doctors.
    pub specialty: String,
    /// Weekly off-shifts. The roster builder produces exactly one, but the
    /// model supports several.
    #[serde(default)]
    pub off_shifts: Vec<OffShift>,
    /// Slots the doctor is available for, derived from the off-shifts.
    #[serde(default)]
    pub free_slots: BTreeSet<usize>,
}

impl Doctor {
    /// Creates a doctor with no roster yet.
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
            off_shifts: Vec::new(),
            free_slots: BTreeSet::new(),
        }
    }

    /// Adds an off-shift entry.
    pub fn with_off_shift(mut self, day: usize, shift: Shift) -> Self {
        self.off_shifts.push(OffShift::new(day, shift));
        self
    }

    /// Whether the doctor works the given `(day, shift)` pair.
    pub fn is_working(&self, day: usize, shift: Shift) -> bool {
        !self
            .off_shifts
            .iter()
            .any(|off| off.day == day && off.shift == shift)
    }

    /// Whether the doctor is free at a specific slot.
    #[inline]
    pub fn is_free_at(&self, slot: usize) -> bool {
        self.free_slots.contains(&slot)
    }
}
