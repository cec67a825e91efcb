use crate::bar::Barbell;
use crate::plate_error::{PlanError, PlateError, PlateSetError};
use crate::plate_set::PlateSet;
use crate::selection::Selection;
use crate::warmup::WarmupPlan;

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type Barbell;
        type Selection;
        type WarmupPlan;
        type PlateError;
        type PlanError;
        type PlateSetError;

        #[swift_bridge(associated_to = Barbell)]
        fn standard() -> Barbell;
        #[swift_bridge(associated_to = Barbell)]
        fn custom(bar_weight: f64, plates: Vec<f64>) -> Result<Barbell, PlateSetError>;

        fn select(self: &Barbell, total: f64) -> Result<Selection, PlateError>;
        fn plan(self: &Barbell, start: f64, working: f64, count: usize) -> Result<WarmupPlan, PlanError>;

        fn total(self: &Selection) -> f64;
        fn per_side(self: &Selection) -> f64;
        fn plate_weights(self: &Selection) -> Vec<f64>;
        fn rendered(self: &Selection) -> String;

        fn sets(self: &WarmupPlan) -> Vec<Selection>;
        fn rendered(self: &WarmupPlan) -> String;

        fn message(self: &PlateError) -> String;
        fn message(self: &PlanError) -> String;
        fn message(self: &PlateSetError) -> String;
    }
}

impl Barbell {
    fn standard() -> Self {
        Barbell::default()
    }

    fn custom(bar_weight: f64, plates: Vec<f64>) -> Result<Self, PlateSetError> {
        Barbell::new(bar_weight, PlateSet::new(plates)?)
    }
}

impl Selection {
    fn plate_weights(&self) -> Vec<f64> {
        self.plates().iter().map(|(plate, _)| plate.weight()).collect()
    }

    fn rendered(&self) -> String {
        self.to_string()
    }
}

impl WarmupPlan {
    fn sets(&self) -> Vec<Selection> {
        self.iter().map(|(_, selection)| selection.clone()).collect()
    }

    fn rendered(&self) -> String {
        self.to_string()
    }
}

impl PlateError {
    fn message(&self) -> String {
        self.to_string()
    }
}

impl PlanError {
    fn message(&self) -> String {
        self.to_string()
    }
}

impl PlateSetError {
    fn message(&self) -> String {
        self.to_string()
    }
}
