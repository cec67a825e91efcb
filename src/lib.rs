#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

pub mod bar;
#[cfg(feature = "swift")]
pub mod bridge;
pub mod plate;
pub mod plate_error;
pub mod plate_set;
pub mod selection;
pub mod warmup;

pub use bar::Barbell;
pub use plate::Plate;
pub use plate_error::{PlanError, PlateError, PlateSetError};
pub use plate_set::PlateSet;
pub use selection::{Selection, select_plates};
pub use warmup::{SetLabel, WarmupPlan, plan_warmups, warmup_totals};
