use std::fmt::Display;

use crate::{
    plate::format_weight,
    plate_error::{PlanError, PlateError, PlateSetError},
    plate_set::PlateSet,
    selection::{Selection, select_plates},
    warmup::{WarmupPlan, plan_warmups, warmup_totals},
};

pub const DEFAULT_BAR_WEIGHT: f64 = 45.0;

/// A bar together with the plates that can be loaded on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Barbell {
    bar_weight: f64,
    plates: PlateSet,
}

impl Barbell {
    ///
    /// # Errors
    /// If the bar weight is not a positive number.
    ///
    pub fn new(bar_weight: f64, plates: PlateSet) -> Result<Self, PlateSetError> {
        if !bar_weight.is_finite() || bar_weight <= 0.0 {
            return Err(PlateSetError::InvalidBarWeight(bar_weight));
        }

        Ok(Barbell { bar_weight, plates })
    }

    #[must_use]
    pub fn bar_weight(&self) -> f64 {
        self.bar_weight
    }

    #[must_use]
    pub fn plates(&self) -> &PlateSet {
        &self.plates
    }

    #[must_use]
    pub fn increment(&self) -> f64 {
        self.plates.increment()
    }

    /// Heaviest total this bar can be loaded to.
    #[must_use]
    pub fn max_total(&self) -> f64 {
        self.bar_weight + self.plates.capacity() * 2.0
    }

    ///
    /// # Errors
    /// See [`select_plates`].
    ///
    pub fn select(&self, total: f64) -> Result<Selection, PlateError> {
        select_plates(total, self.bar_weight, &self.plates)
    }

    ///
    /// # Errors
    /// See [`warmup_totals`].
    ///
    pub fn warmup_totals(&self, start: f64, working: f64, count: usize) -> Result<Vec<f64>, PlateError> {
        warmup_totals(start, working, count, self.bar_weight, self.increment())
    }

    ///
    /// # Errors
    /// See [`plan_warmups`].
    ///
    pub fn plan(&self, start: f64, working: f64, count: usize) -> Result<WarmupPlan, PlanError> {
        plan_warmups(start, working, count, self.bar_weight, &self.plates)
    }
}

impl Default for Barbell {
    fn default() -> Self {
        Barbell {
            bar_weight: DEFAULT_BAR_WEIGHT,
            plates: PlateSet::default(),
        }
    }
}

impl Display for Barbell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} lb bar, plates [{}]", format_weight(self.bar_weight), self.plates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_bar() {
        let barbell = Barbell::default();
        assert_eq!(barbell.bar_weight(), 45.0);
        assert_eq!(barbell.max_total(), 325.0);
        assert_eq!(
            barbell.to_string(),
            "45 lb bar, plates [45, 35, 25, 15, 10, 5, 2.5, 1, 0.75, 0.5, 0.25]"
        );
    }

    #[test]
    fn rejects_bad_bar_weight() {
        assert_eq!(
            Barbell::new(0.0, PlateSet::default()),
            Err(PlateSetError::InvalidBarWeight(0.0))
        );
        assert!(Barbell::new(f64::INFINITY, PlateSet::default()).is_err());
    }

    #[test]
    fn custom_bar_changes_the_floor() {
        let barbell = Barbell::new(35.0, PlateSet::default()).unwrap();
        assert_eq!(
            barbell.select(30.0),
            Err(PlateError::BelowBarWeight { bar_weight: 35.0 })
        );
        assert_eq!(barbell.select(125.0).unwrap().per_side(), 45.0);
        assert_eq!(barbell.select(35.0).unwrap().to_string(), "Plates to load\nJust the 35 lb bar.");
    }

    #[test]
    fn coarse_plates_widen_the_grid() {
        let plates = PlateSet::new(vec![45.0, 25.0, 10.0, 5.0, 2.5]).unwrap();
        let barbell = Barbell::new(45.0, plates).unwrap();
        assert_eq!(barbell.increment(), 5.0);
        assert_eq!(
            barbell.select(46.0),
            Err(PlateError::InvalidIncrement { increment: 5.0 })
        );
        assert_eq!(barbell.warmup_totals(45.0, 100.0, 3).unwrap(), vec![45.0, 60.0, 80.0]);
        assert!(barbell.plan(45.0, 100.0, 3).is_ok());
    }
}
