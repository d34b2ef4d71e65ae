//! Light wrappers around values to enforce correct units.
//!
//! The six conversion formulas live here, as `From` implementations between each ordered pair of
//! distinct scales. The wrappers do no validation: a value below absolute zero converts just like
//! any other, and NaN flows through the arithmetic unchanged.

/// Degrees Celsius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Celsius(pub f64);

/// Degrees Fahrenheit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fahrenheit(pub f64);

/// Kelvin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kelvin(pub f64);

impl From<Celsius> for Fahrenheit {
    fn from(celsius: Celsius) -> Fahrenheit {
        Fahrenheit(celsius.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(fahrenheit: Fahrenheit) -> Celsius {
        Celsius((fahrenheit.0 - 32.0) * 5.0 / 9.0)
    }
}

impl From<Celsius> for Kelvin {
    fn from(celsius: Celsius) -> Kelvin {
        Kelvin(celsius.0 + 273.15)
    }
}

impl From<Kelvin> for Celsius {
    fn from(kelvin: Kelvin) -> Celsius {
        Celsius(kelvin.0 - 273.15)
    }
}

impl From<Fahrenheit> for Kelvin {
    fn from(fahrenheit: Fahrenheit) -> Kelvin {
        Kelvin((fahrenheit.0 - 32.0) * 5.0 / 9.0 + 273.15)
    }
}

impl From<Kelvin> for Fahrenheit {
    fn from(kelvin: Kelvin) -> Fahrenheit {
        Fahrenheit((kelvin.0 - 273.15) * 9.0 / 5.0 + 32.0)
    }
}
