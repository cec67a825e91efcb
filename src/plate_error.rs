use thiserror::Error;

use crate::{plate::format_weight, warmup::SetLabel};

fn lb(weight: &f64) -> String {
    format_weight(*weight)
}

fn half_lb(weight: &f64) -> String {
    format_weight(*weight / 2.0)
}

/// Why a single total (or a warmup request) cannot be loaded.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum PlateError {
    #[error("Enter a valid number.")]
    InvalidInput,
    #[error("Total must be at least {} lb.", lb(.bar_weight))]
    BelowBarWeight { bar_weight: f64 },
    #[error("Total must be in {} lb increments ({} per side).", lb(.increment), half_lb(.increment))]
    InvalidIncrement { increment: f64 },
    #[error("Starting weight must be below the working weight.")]
    StartNotBelowTarget,
    #[error("That weight cannot be matched with one pair of each plate.")]
    Unmatchable,
    #[error("At least one warmup set is required.")]
    NoWarmupSets,
    #[error("At most {max} warmup sets are supported.")]
    TooManyWarmupSets { max: usize },
}

/// A warmup plan failure. Selection failures name the set they came from.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    Request(PlateError),
    #[error("{set}: {source}")]
    Set { set: SetLabel, source: PlateError },
}

impl PlanError {
    #[must_use]
    pub fn cause(&self) -> PlateError {
        match self {
            PlanError::Request(error) | PlanError::Set { source: error, .. } => *error,
        }
    }
}

impl From<PlateError> for PlanError {
    fn from(error: PlateError) -> Self {
        PlanError::Request(error)
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum PlateSetError {
    #[error("At least one plate weight is required.")]
    Empty,
    #[error("Plate weight {0} must be a positive number.")]
    InvalidPlate(f64),
    #[error("Plate weights must be strictly decreasing ({previous} then {next}).")]
    NotDescending { previous: f64, next: f64 },
    #[error("Bar weight {0} must be a positive number.")]
    InvalidBarWeight(f64),
    #[error("Cannot parse plate weight {0:?}.")]
    Parse(String),
}
