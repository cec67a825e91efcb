use std::fmt::Display;

use tracing::debug;

use crate::{
    plate_error::{PlanError, PlateError},
    plate_set::PlateSet,
    selection::{INCREMENT_TOLERANCE, Selection, is_aligned, select_plates},
};

pub const DEFAULT_WARMUP_SETS: usize = 4;
pub const MAX_WARMUP_SETS: usize = 100;

/// Which set of a plan a selection belongs to. Warmups count from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetLabel {
    Warmup(usize),
    Working,
}

impl Display for SetLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetLabel::Warmup(index) => write!(f, "Warmup {index}"),
            SetLabel::Working => write!(f, "Working"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WarmupPlan {
    warmups: Vec<Selection>,
    working: Selection,
}

impl WarmupPlan {
    #[must_use]
    pub fn warmups(&self) -> &[Selection] {
        &self.warmups
    }

    #[must_use]
    pub fn working(&self) -> &Selection {
        &self.working
    }

    #[must_use]
    pub fn totals(&self) -> Vec<f64> {
        self.iter().map(|(_, selection)| selection.total()).collect()
    }

    /// Every set in lifting order, working set last.
    pub fn iter(&self) -> impl Iterator<Item = (SetLabel, &Selection)> {
        self.warmups
            .iter()
            .enumerate()
            .map(|(i, selection)| (SetLabel::Warmup(i + 1), selection))
            .chain(std::iter::once((SetLabel::Working, &self.working)))
    }
}

impl Display for WarmupPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (label, selection)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            writeln!(f, "{label}")?;
            write!(f, "{selection}")?;
        }
        Ok(())
    }
}

/// Rounds `weight` down onto the grid of totals reachable from the bar.
fn floor_to_increment(weight: f64, bar_weight: f64, increment: f64) -> f64 {
    let steps = ((weight - bar_weight) / increment + INCREMENT_TOLERANCE).floor();
    bar_weight + steps * increment
}

///
/// Spreads `count` warmup totals evenly from `start` towards `working`.
///
/// The first warmup is always `start`. The rest are floored onto the increment grid and
/// kept between `start` and the last grid total at least one increment below `working`,
/// so neighbouring warmups may repeat a weight.
///
/// # Errors
/// If `start` is not a valid loadable total, `working` is not finite, `start` is not below
/// `working`, or `count` is zero or above [`MAX_WARMUP_SETS`].
///
pub fn warmup_totals(
    start: f64,
    working: f64,
    count: usize,
    bar_weight: f64,
    increment: f64,
) -> Result<Vec<f64>, PlateError> {
    if !start.is_finite() {
        return Err(PlateError::InvalidInput);
    }

    if start < bar_weight {
        return Err(PlateError::BelowBarWeight { bar_weight });
    }

    if !is_aligned(start, bar_weight, increment) {
        return Err(PlateError::InvalidIncrement { increment });
    }

    if !working.is_finite() {
        return Err(PlateError::InvalidInput);
    }

    if start >= working {
        return Err(PlateError::StartNotBelowTarget);
    }

    if count == 0 {
        return Err(PlateError::NoWarmupSets);
    }

    if count > MAX_WARMUP_SETS {
        return Err(PlateError::TooManyWarmupSets { max: MAX_WARMUP_SETS });
    }

    let step = (working - start) / count as f64;
    let ceiling = floor_to_increment(working - increment, bar_weight, increment);

    let totals = std::iter::once(start)
        .chain((1..count).map(|i| {
            let candidate = start + step * i as f64;
            floor_to_increment(candidate, bar_weight, increment)
                .min(ceiling)
                .max(start)
        }))
        .collect::<Vec<_>>();

    debug!(start, working, ?totals, "spread warmup totals");

    Ok(totals)
}

///
/// Builds a full plan: plates for each warmup total and for the working total.
///
/// # Errors
/// If the request is invalid, or any set cannot be loaded. Set failures carry the set's
/// label; no partial plan is returned.
///
pub fn plan_warmups(
    start: f64,
    working: f64,
    count: usize,
    bar_weight: f64,
    plate_set: &PlateSet,
) -> Result<WarmupPlan, PlanError> {
    let totals = warmup_totals(start, working, count, bar_weight, plate_set.increment())?;

    let warmups = totals
        .iter()
        .enumerate()
        .map(|(i, total)| {
            select_plates(*total, bar_weight, plate_set).map_err(|source| PlanError::Set {
                set: SetLabel::Warmup(i + 1),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let working = select_plates(working, bar_weight, plate_set).map_err(|source| PlanError::Set {
        set: SetLabel::Working,
        source,
    })?;

    Ok(WarmupPlan { warmups, working })
}
