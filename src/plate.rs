use std::{fmt::Display, iter::Sum};

/// A single plate denomination, weighed in pounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plate {
    weight: f64,
}

impl Plate {
    #[must_use]
    pub fn new(weight: f64) -> Self {
        Plate { weight }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn from_weights(weights: &[f64]) -> Vec<Plate> {
        weights.iter().copied().map(Plate::new).collect()
    }

    fn fraction_label(&self) -> Option<&'static str> {
        const FRACTIONS: [(f64, &str); 3] = [(0.75, "3/4"), (0.5, "1/2"), (0.25, "1/4")];

        FRACTIONS
            .iter()
            .find(|(weight, _)| (self.weight - weight).abs() < 1e-9)
            .map(|(_, label)| *label)
    }
}

impl Sum for Plate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Plate::new(0.0), |acc, plate| {
            Plate::new(acc.weight + plate.weight)
        })
    }
}

impl<'a> Sum<&'a Plate> for Plate {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.fraction_label() {
            Some(label) => write!(f, "{label} lb"),
            None => write!(f, "{} lb", format_weight(self.weight)),
        }
    }
}

/// Formats a weight with at most two decimals, dropping trailing zeros.
#[must_use]
pub fn format_weight(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        return format!("{rounded:.0}");
    }

    let fixed = format!("{rounded:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
