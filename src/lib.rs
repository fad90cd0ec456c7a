//! Clinic appointment scheduling under availability and capacity constraints.
//!
//! Models a weekly outpatient clinic — doctors with specialties and randomly
//! rostered off-shifts, patients with priorities and personal availability —
//! and searches for a good assignment of patients to doctors and time slots
//! with a genetic algorithm.
//!
//! # Modules
//!
//! - **`models`**: Domain types — the slot grid (`SlotTime`, `Shift`),
//!   `Doctor`, `Patient`, `Assignment`, `ScheduleState`
//! - **`roster`**: Weekly off-shift generation and the availability index
//! - **`ga`**: The optimization layer — `ScheduleProblem` behind the
//!   `GaProblem` contract, driven by `GaRunner`
//! - **`validation`**: Input integrity checks (duplicate IDs, slot ranges)
//! - **`kpi`**: Assignment-rate, per-shift load, and workload-balance metrics
//! - **`stats`**: The small statistics helpers the scorer and KPIs share
//!
//! # Architecture
//!
//! Hard per-patient feasibility (specialty match, doctor availability) is
//! enforced when candidates are generated or mutated; cross-patient conflicts
//! and capacity overruns are priced during evaluation. The search driver
//! treats the problem as opaque: it only sees the four operations of
//! [`ga::GaProblem`].
//!
//! # Example
//!
//! ```no_run
//! use clinic_schedule::ga::{GaConfig, GaRunner, ScheduleProblem};
//! use clinic_schedule::kpi::ScheduleKpi;
//! use clinic_schedule::models::{Doctor, Patient};
//! use clinic_schedule::roster::assign_weekly_roster;
//! use clinic_schedule::validation::validate_input;
//!
//! let mut doctors = vec![Doctor::new("Anna", "GP"), Doctor::new("Ben", "Cardio")];
//! let patients = vec![Patient::new("P1", "GP").with_free_slots(0..160)];
//!
//! let mut rng = rand::rng();
//! assign_weekly_roster(&mut doctors, &mut rng);
//! validate_input(&doctors, &patients).expect("well-formed input");
//!
//! let problem = ScheduleProblem::new(doctors, patients);
//! let result = GaRunner::run(&problem, &GaConfig::default().with_seed(42));
//!
//! let kpi = ScheduleKpi::calculate(&result.best_state, problem.doctors(), problem.patients());
//! println!("scheduled {}/{} patients", kpi.scheduled_count, kpi.patient_count);
//! ```

pub mod ga;
pub mod kpi;
pub mod models;
pub mod roster;
pub mod stats;
pub mod validation;
