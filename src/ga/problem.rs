//! Appointment-assignment problem definition.
//!
//! [`ScheduleProblem`] bridges the clinic domain (doctors, patients, the slot
//! grid) to the generic GA driver: it generates random candidate schedules,
//! scores them, and perturbs/recombines them via the [`GaProblem`] contract.
//!
//! # Scoring
//!
//! A candidate is scored in one pass over patients, in index order. An
//! assignment only counts when it fits the horizon, claims no slot an
//! earlier patient already claimed (first claim wins), lies entirely within
//! the doctor's free slots, and falls in a shift the doctor works. Counting
//! assignments earn `priority × 10 + max(0, 100 − slot) + 50`; a doctor/shift
//! bucket over [`MAX_PATIENTS_PER_SHIFT`] costs 1000 per excess assignment
//! instead. The final score subtracts half the population variance of
//! per-doctor occupied slot-units, so spreading work across doctors pays.
//!
//! Hard feasibility per patient is enforced at generation/mutation time;
//! cross-patient conflicts are left to scoring, which keeps the search space
//! connected enough for the optimizer to explore.

use std::collections::{HashMap, HashSet};

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::engine::GaProblem;
use crate::models::{
    shift_key, Assignment, Doctor, Patient, ScheduleState, Shift, MAX_PATIENTS_PER_SHIFT,
    TOTAL_SLOTS,
};
use crate::stats;

const PRIORITY_WEIGHT: f64 = 10.0;
const EARLINESS_BASE: i64 = 100;
const WITHIN_CAPACITY_BONUS: f64 = 50.0;
const OVER_CAPACITY_PENALTY: f64 = 1000.0;
const IMBALANCE_WEIGHT: f64 = 0.5;
const MUTATION_ATTEMPTS: usize = 10;

/// The schedule-optimization problem: doctors, patients, and the rules that
/// make a candidate schedule legal and good.
///
/// Owns an immutable snapshot of the inputs for the duration of a run.
/// [`GaProblem::value`] reads only that snapshot, so independent states may
/// be evaluated concurrently.
///
/// # Example
/// ```no_run
/// use clinic_schedule::ga::{GaConfig, GaRunner, ScheduleProblem};
/// use clinic_schedule::models::{Doctor, Patient};
/// use clinic_schedule::roster::assign_weekly_roster;
///
/// let mut doctors = vec![Doctor::new("Anna", "GP")];
/// let patients = vec![Patient::new("P1", "GP").with_free_slots(0..160)];
/// assign_weekly_roster(&mut doctors, &mut rand::rng());
///
/// let problem = ScheduleProblem::new(doctors, patients);
/// let result = GaRunner::run(&problem, &GaConfig::default());
/// ```
pub struct ScheduleProblem {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
}

impl ScheduleProblem {
    /// Takes ownership of the prepared doctor and patient snapshot.
    ///
    /// Doctors are expected to have their rosters assigned already
    /// (see [`crate::roster::assign_weekly_roster`]).
    pub fn new(doctors: Vec<Doctor>, patients: Vec<Patient>) -> Self {
        Self { doctors, patients }
    }

    /// The doctor snapshot.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// The patient snapshot.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Patients served per `(doctor, day, shift)` bucket.
    ///
    /// A pure derived view over the full state, recomputed on every
    /// evaluation and mutation trial; never maintained incrementally.
    /// Counts every present assignment, including ones scoring later
    /// rejects.
    pub fn shift_occupancy<'s>(
        &self,
        state: &'s ScheduleState,
    ) -> HashMap<(&'s str, usize, Shift), usize> {
        let mut counts = HashMap::new();
        for assign in state
            .assignments
            .iter()
            .take(self.patients.len())
            .flatten()
        {
            let (day, shift) = shift_key(assign.slot);
            *counts
                .entry((assign.doctor.as_str(), day, shift))
                .or_insert(0) += 1;
        }
        counts
    }

    /// All `(slot, doctor)` pairs that are individually legal for a patient:
    /// same specialty, doctor working that slot's shift, slot in the
    /// doctor's free set. Out-of-horizon patient slots survive no doctor's
    /// free-slot check and drop out here.
    fn feasible_pairs<'a>(&'a self, patient: &Patient) -> Vec<(usize, &'a str)> {
        let mut pairs = Vec::new();
        for &slot in &patient.free_slots {
            let (day, shift) = shift_key(slot);
            for doctor in &self.doctors {
                if doctor.specialty == patient.specialty
                    && doctor.is_working(day, shift)
                    && doctor.is_free_at(slot)
                {
                    pairs.push((slot, doctor.name.as_str()));
                }
            }
        }
        pairs
    }
}

impl GaProblem for ScheduleProblem {
    type State = ScheduleState;

    /// One independent draw per patient.
    ///
    /// Unschedulable patients (negative priority, no candidate slots, no
    /// matching specialist, no surviving pair) get an absent assignment.
    /// The result is per-patient consistent but not yet cross-patient
    /// conflict-free; conflicts are priced during evaluation.
    fn generate_random_state<R: Rng>(&self, rng: &mut R) -> ScheduleState {
        self.patients
            .iter()
            .map(|patient| {
                if patient.priority < 0 || patient.free_slots.is_empty() {
                    return None;
                }
                self.feasible_pairs(patient)
                    .choose(rng)
                    .map(|&(slot, doctor)| Assignment::new(slot, doctor))
            })
            .collect()
    }

    /// Scores a candidate schedule. Pure and deterministic.
    fn value(&self, state: &ScheduleState) -> f64 {
        if state.is_empty() {
            return 0.0;
        }

        let occupancy = self.shift_occupancy(state);
        let mut claimed: HashSet<usize> = HashSet::new();
        let mut workload: HashMap<&str, usize> = HashMap::new();
        let mut score = 0.0;

        for (assign, patient) in state.assignments.iter().zip(&self.patients) {
            let Some(assign) = assign else { continue };

            let duration = patient.duration_slots();
            if assign.slot + duration > TOTAL_SLOTS {
                continue;
            }
            let needed = assign.slot..assign.slot + duration;
            if needed.clone().any(|slot| claimed.contains(&slot)) {
                continue;
            }

            let Some(doctor) = self.doctors.iter().find(|d| d.name == assign.doctor) else {
                continue;
            };
            if !needed.clone().all(|slot| doctor.is_free_at(slot)) {
                continue;
            }
            let (day, shift) = shift_key(assign.slot);
            if !doctor.is_working(day, shift) {
                continue;
            }

            let bucket = occupancy
                .get(&(assign.doctor.as_str(), day, shift))
                .copied()
                .unwrap_or(0);
            if bucket > MAX_PATIENTS_PER_SHIFT {
                score -= OVER_CAPACITY_PENALTY;
                continue;
            }

            claimed.extend(needed);
            score += f64::from(patient.priority) * PRIORITY_WEIGHT;
            score += (EARLINESS_BASE - assign.slot as i64).max(0) as f64;
            score += WITHIN_CAPACITY_BONUS;
            *workload.entry(assign.doctor.as_str()).or_insert(0) += duration;
        }

        let loads: Vec<f64> = workload.values().map(|&units| units as f64).collect();
        score - IMBALANCE_WEIGHT * stats::population_variance(&loads)
    }

    /// Single-point perturbation: reassigns exactly one patient.
    ///
    /// Up to a fixed retry budget, picks a random patient and collects the
    /// legal `(slot, doctor)` pairs whose tentative substitution keeps that
    /// doctor/shift bucket at or below capacity (occupancy recomputed from
    /// the full tentative state each trial). Replaces the one assignment
    /// with a uniform choice, or returns an unchanged copy when every
    /// attempt comes up empty.
    fn mutate<R: Rng>(&self, state: &ScheduleState, rng: &mut R) -> ScheduleState {
        let mut next = state.clone();
        let len = state.len().min(self.patients.len());
        if len == 0 {
            return next;
        }

        for _ in 0..MUTATION_ATTEMPTS {
            let idx = rng.random_range(0..len);
            let patient = &self.patients[idx];
            if patient.priority < 0 || patient.free_slots.is_empty() {
                continue;
            }

            let mut candidates = Vec::new();
            for (slot, doctor) in self.feasible_pairs(patient) {
                let mut trial = next.clone();
                trial.assignments[idx] = Some(Assignment::new(slot, doctor));
                let occupancy = self.shift_occupancy(&trial);
                let (day, shift) = shift_key(slot);
                let bucket = occupancy.get(&(doctor, day, shift)).copied().unwrap_or(0);
                if bucket <= MAX_PATIENTS_PER_SHIFT {
                    candidates.push((slot, doctor));
                }
            }

            if let Some(&(slot, doctor)) = candidates.choose(rng) {
                next.assignments[idx] = Some(Assignment::new(slot, doctor));
                return next;
            }
        }

        next
    }

    /// Single-point recombination: A-prefix + B-suffix.
    ///
    /// Empty parents pass the other through; mismatched lengths truncate to
    /// the shorter. Conflicts introduced at the cut are not repaired here —
    /// evaluation prices them and later mutation cycles resolve them.
    fn crossover<R: Rng>(
        &self,
        a: &ScheduleState,
        b: &ScheduleState,
        rng: &mut R,
    ) -> ScheduleState {
        if a.is_empty() {
            return b.clone();
        }
        if b.is_empty() {
            return a.clone();
        }

        let len = a.len().min(b.len());
        let cut = if len > 1 { rng.random_range(1..len) } else { 1 };

        a.assignments[..cut]
            .iter()
            .chain(b.assignments[cut..len].iter())
            .cloned()
            .collect()
    }
}
