use std::fmt::Display;

use tracing::{debug, trace};

use crate::{
    plate::{Plate, format_weight},
    plate_error::PlateError,
    plate_set::PlateSet,
};

/// Slack allowed when deciding whether a plate still fits.
pub const FIT_TOLERANCE: f64 = 1e-6;
/// Slack allowed when checking that a total lands on the increment grid.
pub const INCREMENT_TOLERANCE: f64 = 1e-6;
/// Largest per-side remainder still treated as fully loaded.
pub const LEFTOVER_TOLERANCE: f64 = 0.001;

/// Plates to put on each side of the bar for one total.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    plates: Vec<(Plate, usize)>,
    per_side: f64,
    total: f64,
    bar_weight: f64,
}

impl Selection {
    /// Plates per side as `(plate, count)`, heaviest first. Counts are always 1.
    #[must_use]
    pub fn plates(&self) -> &[(Plate, usize)] {
        &self.plates
    }

    #[must_use]
    pub fn per_side(&self) -> f64 {
        self.per_side
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    #[must_use]
    pub fn bar_weight(&self) -> f64 {
        self.bar_weight
    }

    #[must_use]
    pub fn is_empty_bar(&self) -> bool {
        self.plates.is_empty()
    }

    /// Weight actually loaded: the bar plus the chosen plates on both sides.
    #[must_use]
    pub fn loaded_weight(&self) -> f64 {
        let side: Plate = self.plates.iter().map(|(plate, _)| *plate).sum();
        self.bar_weight + side.weight() * 2.0
    }
}

/// Checks that `total - bar_weight` is a whole number of increments.
pub(crate) fn is_aligned(total: f64, bar_weight: f64, increment: f64) -> bool {
    let delta = total - bar_weight;
    let steps = (delta / increment).round();
    (delta - steps * increment).abs() <= INCREMENT_TOLERANCE
}

///
/// Greedily picks at most one plate of each denomination per side, heaviest first.
/// There is no backtracking: a total that needs two plates of the same weight on a side
/// is reported as unmatchable rather than searched for.
///
/// # Errors
/// If `total` is not finite, lighter than the bar, off the increment grid, or cannot be
/// reached with one plate of each weight per side.
///
pub fn select_plates(total: f64, bar_weight: f64, plate_set: &PlateSet) -> Result<Selection, PlateError> {
    if !total.is_finite() {
        return Err(PlateError::InvalidInput);
    }

    if total < bar_weight {
        return Err(PlateError::BelowBarWeight { bar_weight });
    }

    let increment = plate_set.increment();
    if !is_aligned(total, bar_weight, increment) {
        return Err(PlateError::InvalidIncrement { increment });
    }

    let per_side = (total - bar_weight) / 2.0;
    let mut remaining = per_side;
    let mut plates = Vec::new();

    for plate in plate_set.plates() {
        if remaining + FIT_TOLERANCE >= plate.weight() {
            trace!(plate = plate.weight(), remaining, "loading plate");
            plates.push((*plate, 1));
            remaining -= plate.weight();
        }
    }

    if remaining > LEFTOVER_TOLERANCE {
        debug!(total, remaining, "total cannot be matched with one of each plate");
        return Err(PlateError::Unmatchable);
    }

    debug!(total, per_side, plates = plates.len(), "selected plates");

    Ok(Selection {
        plates,
        per_side,
        total,
        bar_weight,
    })
}

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Plates to load")?;
        if self.is_empty_bar() {
            return write!(f, "Just the {} lb bar.", format_weight(self.bar_weight));
        }

        for (plate, count) in &self.plates {
            writeln!(f, "  {:<8} x {count} per side", plate.to_string())?;
        }
        write!(
            f,
            "Bar: {} lb  Per side: {} lb  Total: {} lb",
            format_weight(self.bar_weight),
            format_weight(self.per_side),
            format_weight(self.total)
        )
    }
}
