//! Human readable serving size labels.
//!
//! Quantities are always grams (or millilitres); the unit and the weight of
//! one unit turn that into a count such as `"60g (2 slices)"`. Counts are
//! rounded to one decimal place.

use std::fmt;

use crate::models::DEFAULT_UNIT;

/// Fallback quantity for missing or unusable input.
const FALLBACK_QUANTITY: f64 = 100.0;

/// Absolute tolerance for treating a quantity as exactly one unit.
const EXACT_MATCH_TOLERANCE: f64 = 0.01;

/// Relative tolerance for treating a slice or piece as one unit.
const CLOSE_MATCH_RATIO: f64 = 0.05;

/// Serving size label built from a quantity, a unit and a unit weight.
///
/// Missing or unusable numbers are defaulted: the quantity to `100`, the
/// weight to the quantity, and the unit to `"g"`.
///
/// # Examples
///
/// ```rust
/// use foodlog_core::display::ServingSize;
///
/// assert_eq!(ServingSize::new(Some(60.0), Some("slice"), Some(30.0)).to_string(), "60g (2 slices)");
/// assert_eq!(ServingSize::new(None, None, None).to_string(), "100g");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServingSize<'a> {
    quantity: f64,
    unit: &'a str,
    weight: f64,
}

impl<'a> ServingSize<'a> {
    pub fn new(quantity: Option<f64>, unit: Option<&'a str>, weight: Option<f64>) -> Self {
        let quantity = usable(quantity).unwrap_or(FALLBACK_QUANTITY);
        let weight = usable(weight).unwrap_or(quantity);
        let unit = unit.filter(|u| !u.is_empty()).unwrap_or(DEFAULT_UNIT);
        Self {
            quantity,
            unit,
            weight,
        }
    }

    /// Number of units in the serving, rounded to one decimal.
    pub fn unit_count(&self) -> f64 {
        round_tenths(self.quantity / self.weight)
    }

    fn is_exact_match(&self) -> bool {
        (self.quantity - self.weight).abs() < EXACT_MATCH_TOLERANCE
    }

    fn is_close_match(&self) -> bool {
        (self.quantity - self.weight).abs() / self.weight < CLOSE_MATCH_RATIO
    }
}

impl fmt::Display for ServingSize<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantity = self.quantity;
        let unit = self.unit;
        let count = self.unit_count();

        match unit {
            "g" | "ml" => write!(f, "{quantity}{unit}"),
            "slice" | "piece" | "cookie" | "egg" if self.is_exact_match() => {
                write!(f, "{quantity}g (1 {unit})")
            }
            "slice" | "piece" if self.is_close_match() => write!(f, "{quantity}g (1 {unit})"),
            "cookie" | "egg" | "piece" | "slice" | "unit" => {
                write!(f, "{quantity}g ({count} {})", pluralize(unit, count))
            }
            "cup" | "tbsp" | "tsp" => {
                write!(f, "{quantity}g ({count} {})", pluralize(volume_name(unit), count))
            }
            other => write!(f, "{quantity}g ({other})"),
        }
    }
}

/// Formats a serving size label.
///
/// See [`ServingSize`] for the defaulting rules.
pub fn format_serving_size(quantity: Option<f64>, unit: Option<&str>, weight: Option<f64>) -> String {
    ServingSize::new(quantity, unit, weight).to_string()
}

/// Heading of the manual nutrition form, describing which serving the
/// entered values refer to.
///
/// Unlike [`ServingSize`], the plural is decided on the unrounded ratio.
pub fn manual_serving_caption(serving_size: f64, unit: Option<&str>, weight: Option<f64>) -> String {
    let weight = usable(weight).unwrap_or(FALLBACK_QUANTITY);
    match unit.filter(|u| !u.is_empty()) {
        Some(unit) => {
            let ratio = serving_size / weight;
            let suffix = if ratio == 1.0 { "" } else { "s" };
            format!(
                "Manual Nutrition Input (for {serving_size}g = {} {unit}{suffix})",
                round_tenths(ratio)
            )
        }
        None => format!("Manual Nutrition Input (for {serving_size}g)"),
    }
}

/// Explanation shown under the manual nutrition heading.
pub fn manual_serving_hint(serving_size: f64) -> String {
    format!("Enter nutrition values for {serving_size}g of this food, not per 100g.")
}

/// Treats zero and non-finite numbers as missing.
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn pluralize(word: &str, count: f64) -> String {
    if count == 1.0 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

fn volume_name(unit: &str) -> &str {
    match unit {
        "tbsp" => "tablespoon",
        "tsp" => "teaspoon",
        other => other,
    }
}
