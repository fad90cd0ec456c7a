//! Schedule quality metrics and reporting views.
//!
//! Aggregates a candidate schedule into the figures a front end shows:
//! how many patients were placed, who serves whom in which shift, which
//! doctor/shift buckets run over capacity, and how evenly the work is
//! spread. Also renders assignment rows with the slot index resolved to
//! `(day, shift, position)` for grid display.
//!
//! These are reporting views over a finished state; scoring semantics live
//! in [`crate::ga::ScheduleProblem`].

use std::collections::HashMap;

use crate::models::{
    shift_key, Doctor, Patient, ScheduleState, Shift, SlotTime, MAX_PATIENTS_PER_SHIFT,
};
use crate::roster::AvailabilityIndex;
use crate::stats;

/// One renderable schedule entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    /// Patient identifier.
    pub patient_id: String,
    /// Assigned doctor name.
    pub doctor: String,
    /// Day name ("Mon".."Fri").
    pub day: &'static str,
    /// Half-day shift.
    pub shift: Shift,
    /// Position within the shift.
    pub position: usize,
    /// Patient priority.
    pub priority: i32,
}

/// Aggregated schedule indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Total patients in the run.
    pub patient_count: usize,
    /// Patients with a present assignment.
    pub scheduled_count: usize,
    /// `scheduled_count / patient_count` (1.0 when there are no patients).
    pub assignment_rate: f64,
    /// Patient IDs grouped per `(doctor, day, shift)` bucket.
    pub patients_by_shift: HashMap<(String, usize, Shift), Vec<String>>,
    /// Buckets holding more than [`MAX_PATIENTS_PER_SHIFT`] patients.
    pub overloaded_shift_count: usize,
    /// Occupied slot-units per doctor.
    pub workload_by_doctor: HashMap<String, usize>,
    /// Population variance of per-doctor workloads.
    pub workload_variance: f64,
    /// Occupied slot-units over available slots, per doctor with workload.
    pub utilization_by_doctor: HashMap<String, f64>,
}

impl ScheduleKpi {
    /// Computes indicators from a state and the run's input snapshot.
    pub fn calculate(state: &ScheduleState, doctors: &[Doctor], patients: &[Patient]) -> Self {
        let mut patients_by_shift: HashMap<(String, usize, Shift), Vec<String>> = HashMap::new();
        let mut workload_by_doctor: HashMap<String, usize> = HashMap::new();
        let mut scheduled_count = 0;

        for (assign, patient) in state.assignments.iter().zip(patients) {
            let Some(assign) = assign else { continue };
            scheduled_count += 1;

            let (day, shift) = shift_key(assign.slot);
            patients_by_shift
                .entry((assign.doctor.clone(), day, shift))
                .or_default()
                .push(patient.id.clone());
            *workload_by_doctor.entry(assign.doctor.clone()).or_insert(0) +=
                patient.duration_slots();
        }

        let overloaded_shift_count = patients_by_shift
            .values()
            .filter(|ids| ids.len() > MAX_PATIENTS_PER_SHIFT)
            .count();

        let loads: Vec<f64> = workload_by_doctor.values().map(|&w| w as f64).collect();
        let workload_variance = stats::population_variance(&loads);

        let index = AvailabilityIndex::build(doctors);
        let utilization_by_doctor = workload_by_doctor
            .iter()
            .filter_map(|(name, &load)| {
                let capacity = index.free_slot_count(name);
                (capacity > 0).then(|| (name.clone(), load as f64 / capacity as f64))
            })
            .collect();

        let assignment_rate = if patients.is_empty() {
            1.0
        } else {
            scheduled_count as f64 / patients.len() as f64
        };

        Self {
            patient_count: patients.len(),
            scheduled_count,
            assignment_rate,
            patients_by_shift,
            overloaded_shift_count,
            workload_by_doctor,
            workload_variance,
            utilization_by_doctor,
        }
    }

    /// Patients a doctor serves in a given bucket (empty when none).
    pub fn patients_in_shift(&self, doctor: &str, day: usize, shift: Shift) -> &[String] {
        self.patients_by_shift
            .get(&(doctor.to_string(), day, shift))
            .map_or(&[], Vec::as_slice)
    }
}

/// Resolves a state into renderable rows, in patient order.
///
/// Assignments whose slot does not decompose (out-of-horizon) are skipped
/// rather than failing the whole report.
pub fn schedule_rows(state: &ScheduleState, patients: &[Patient]) -> Vec<ScheduleRow> {
    state
        .assignments
        .iter()
        .zip(patients)
        .filter_map(|(assign, patient)| {
            let assign = assign.as_ref()?;
            let time = SlotTime::from_index(assign.slot).ok()?;
            Some(ScheduleRow {
                patient_id: patient.id.clone(),
                doctor: assign.doctor.clone(),
                day: time.day_name(),
                shift: time.shift,
                position: time.position,
                priority: patient.priority,
            })
        })
        .collect()
}
