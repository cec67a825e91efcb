use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::{
    plate::{Plate, format_weight},
    plate_error::PlateSetError,
};

pub const DEFAULT_PLATES: [f64; 11] = [45.0, 35.0, 25.0, 15.0, 10.0, 5.0, 2.5, 1.0, 0.75, 0.5, 0.25];

/// Plate denominations available for one side of the bar, heaviest first.
#[derive(Clone, Debug, PartialEq)]
pub struct PlateSet {
    plates: Vec<Plate>,
}

impl PlateSet {
    ///
    /// # Errors
    /// If the weights are empty, contain a non-positive or non-finite weight, or are not
    /// strictly decreasing.
    ///
    pub fn new(weights: Vec<f64>) -> Result<Self, PlateSetError> {
        if weights.is_empty() {
            return Err(PlateSetError::Empty);
        }

        if let Some(weight) = weights.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            return Err(PlateSetError::InvalidPlate(*weight));
        }

        if let Some((previous, next)) = weights.iter().tuple_windows().find(|(a, b)| a <= b) {
            return Err(PlateSetError::NotDescending {
                previous: *previous,
                next: *next,
            });
        }

        Ok(PlateSet {
            plates: Plate::from_weights(&weights),
        })
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn smallest(&self) -> Plate {
        self.plates[self.plates.len() - 1]
    }

    /// Smallest change in total weight: one of the smallest plate on each side.
    #[must_use]
    pub fn increment(&self) -> f64 {
        self.smallest().weight() * 2.0
    }

    /// Heaviest per-side load reachable with one of each plate.
    #[must_use]
    pub fn capacity(&self) -> f64 {
        self.plates.iter().sum::<Plate>().weight()
    }
}

impl Default for PlateSet {
    fn default() -> Self {
        PlateSet {
            plates: Plate::from_weights(&DEFAULT_PLATES),
        }
    }
}

impl FromStr for PlateSet {
    type Err = PlateSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weights = s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| PlateSetError::Parse(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        PlateSet::new(weights)
    }
}

impl Display for PlateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let weights = self
            .plates
            .iter()
            .map(|p| format_weight(p.weight()))
            .join(", ");
        write!(f, "{weights}")
    }
}
