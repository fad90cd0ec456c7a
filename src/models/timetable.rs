//! Discrete weekly timetable model.
//!
//! The planning horizon is a fixed grid: 5 working days, each split into a
//! morning and an afternoon shift, each shift holding 16 bookable slots.
//! A slot is addressed either by its flat index in `[0, TOTAL_SLOTS)` or by
//! its `(day, shift, position)` decomposition; the two forms are exact
//! bijections over the valid domain.
//!
//! # Slot layout
//!
//! ```text
//! index = day * SLOTS_PER_DAY + shift * SLOTS_PER_SHIFT + position
//! ```
//!
//! Decomposing an index outside the horizon is a range error, never a clamp.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Working day names, indexed by day number.
pub const DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Shifts per working day.
pub const SHIFTS_PER_DAY: usize = 2;

/// Bookable slots in one shift.
pub const SLOTS_PER_SHIFT: usize = 16;

/// Bookable slots in one day.
pub const SLOTS_PER_DAY: usize = SHIFTS_PER_DAY * SLOTS_PER_SHIFT;

/// Total slots in the planning horizon.
pub const TOTAL_SLOTS: usize = DAYS.len() * SLOTS_PER_DAY;

/// Wall-clock minutes covered by one slot.
pub const SLOT_MINUTES: i64 = 15;

/// Maximum patients one doctor may serve within a single shift.
pub const MAX_PATIENTS_PER_SHIFT: usize = 3;

/// Half-day shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Afternoon,
}

/// Capacity-bucket key: one doctor-independent half-day of the week.
pub type ShiftKey = (usize, Shift);

impl Shift {
    /// Both shifts, in within-day order.
    pub const ALL: [Shift; 2] = [Shift::Morning, Shift::Afternoon];

    /// Position of this shift within a day (morning = 0).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Shift::Morning => 0,
            Shift::Afternoon => 1,
        }
    }

    /// Shift for a within-day index.
    pub fn from_index(index: usize) -> Option<Shift> {
        match index {
            0 => Some(Shift::Morning),
            1 => Some(Shift::Afternoon),
            _ => None,
        }
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error raised when a slot index falls outside the planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOutOfRange {
    /// The offending index.
    pub slot: usize,
}

impl fmt::Display for SlotOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot index {} outside planning horizon 0..{}",
            self.slot, TOTAL_SLOTS
        )
    }
}

impl std::error::Error for SlotOutOfRange {}

/// A slot addressed by day, shift, and position within the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTime {
    /// Day number (0 = Mon).
    pub day: usize,
    /// Half-day shift.
    pub shift: Shift,
    /// Position within the shift, `0..SLOTS_PER_SHIFT`.
    pub position: usize,
}

impl SlotTime {
    /// Decomposes a flat slot index.
    ///
    /// # Errors
    /// Returns [`SlotOutOfRange`] if `slot >= TOTAL_SLOTS`.
    pub fn from_index(slot: usize) -> Result<Self, SlotOutOfRange> {
        if slot >= TOTAL_SLOTS {
            return Err(SlotOutOfRange { slot });
        }
        let day = slot / SLOTS_PER_DAY;
        let remaining = slot % SLOTS_PER_DAY;
        let shift = if remaining < SLOTS_PER_SHIFT {
            Shift::Morning
        } else {
            Shift::Afternoon
        };
        Ok(Self {
            day,
            shift,
            position: remaining % SLOTS_PER_SHIFT,
        })
    }

    /// Recomposes the flat slot index.
    #[inline]
    pub fn to_index(&self) -> usize {
        self.day * SLOTS_PER_DAY + self.shift.index() * SLOTS_PER_SHIFT + self.position
    }

    /// Name of this slot's day.
    pub fn day_name(&self) -> &'static str {
        DAYS[self.day]
    }
}

/// Capacity-bucket key for a slot: its `(day, shift)` pair.
///
/// Pure arithmetic; meaningful for slots within the planning horizon.
#[inline]
pub fn shift_key(slot: usize) -> ShiftKey {
    let day = slot / SLOTS_PER_DAY;
    let shift = if slot % SLOTS_PER_DAY < SLOTS_PER_SHIFT {
        Shift::Morning
    } else {
        Shift::Afternoon
    };
    (day, shift)
}

/// Display name for a day number, `None` outside the working week.
pub fn day_name(day: usize) -> Option<&'static str> {
    DAYS.get(day).copied()
}
