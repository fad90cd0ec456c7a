//! Evolutionary search for appointment schedules.
//!
//! Split in two layers with a trait seam between them:
//!
//! - [`engine`]: the generic GA driver — population, tournament selection,
//!   generation loop, termination. Knows nothing about clinics.
//! - [`problem`]: the scheduling problem model — random-state generation,
//!   fitness, mutation, crossover over [`crate::models::ScheduleState`].
//!
//! The driver consumes the problem only through [`GaProblem`], so an
//! alternative search engine can drive the same problem model unchanged.

mod engine;
mod problem;

pub use engine::{GaConfig, GaProblem, GaResult, GaRunner};
pub use problem::ScheduleProblem;
