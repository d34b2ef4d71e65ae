//! The conversion table and its dispatcher.
//!
//! There are six conversions, one per ordered pair of distinct scales. Each is pure `f64`
//! arithmetic with no rounding and no domain validation. The dispatcher selects one of the six by
//! matching on the (source, target) pair; the same-scale pairs are unsupported and produce no
//! result, not an identity conversion.

use scale::Scale;
use units::{Celsius, Fahrenheit, Kelvin};

/// Converts degrees Celsius to degrees Fahrenheit.
///
/// # Examples
///
/// ```
/// assert_eq!(212.0, thermo::convert::celsius_to_fahrenheit(100.0));
/// ```
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    Fahrenheit::from(Celsius(celsius)).0
}

/// Converts degrees Fahrenheit to degrees Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    Celsius::from(Fahrenheit(fahrenheit)).0
}

/// Converts degrees Celsius to Kelvin.
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    Kelvin::from(Celsius(celsius)).0
}

/// Converts Kelvin to degrees Celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    Celsius::from(Kelvin(kelvin)).0
}

/// Converts degrees Fahrenheit to Kelvin.
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    Kelvin::from(Fahrenheit(fahrenheit)).0
}

/// Converts Kelvin to degrees Fahrenheit.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    Fahrenheit::from(Kelvin(kelvin)).0
}

/// Converts a value from one scale to another.
///
/// Returns `None` when the scales are the same. That case is "not handled" rather than an
/// identity conversion, so callers must not fall back to the input value.
///
/// # Examples
///
/// ```
/// use thermo::Scale;
/// use thermo::convert::convert;
///
/// assert_eq!(Some(212.0), convert(100.0, Scale::Celsius, Scale::Fahrenheit));
/// assert_eq!(None, convert(100.0, Scale::Celsius, Scale::Celsius));
/// ```
pub fn convert(value: f64, from: Scale, to: Scale) -> Option<f64> {
    match (from, to) {
        (Scale::Celsius, Scale::Fahrenheit) => Some(celsius_to_fahrenheit(value)),
        (Scale::Fahrenheit, Scale::Celsius) => Some(fahrenheit_to_celsius(value)),
        (Scale::Celsius, Scale::Kelvin) => Some(celsius_to_kelvin(value)),
        (Scale::Kelvin, Scale::Celsius) => Some(kelvin_to_celsius(value)),
        (Scale::Fahrenheit, Scale::Kelvin) => Some(fahrenheit_to_kelvin(value)),
        (Scale::Kelvin, Scale::Fahrenheit) => Some(kelvin_to_fahrenheit(value)),
        (Scale::Celsius, Scale::Celsius) |
        (Scale::Fahrenheit, Scale::Fahrenheit) |
        (Scale::Kelvin, Scale::Kelvin) => None,
    }
}

/// Converts a value between scales given by their string tags.
///
/// Returns `None` for an unrecognized tag as well as for a same-scale pair.
///
/// # Examples
///
/// ```
/// use thermo::convert::convert_tag;
///
/// assert_eq!(Some(32.0), convert_tag(0.0, "celsius", "fahrenheit"));
/// assert_eq!(None, convert_tag(0.0, "celsius", "rankine"));
/// ```
pub fn convert_tag(value: f64, from: &str, to: &str) -> Option<f64> {
    let from = from.parse().ok()?;
    let to = to.parse().ok()?;
    convert(value, from, to)
}
