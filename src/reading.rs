//! A temperature reading is a numeric magnitude paired with its scale.

use std::fmt;

use {Error, Result};
use convert;
use scale::Scale;

/// The value this whole crate exists to manipulate.
///
/// A reading is created from user input, converted once, rendered, and discarded. Its `Display`
/// implementation is the rendering contract: the magnitude to two decimal places, a space, and
/// the lowercase scale tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    value: f64,
    scale: Scale,
}

impl Reading {
    /// Creates a new reading.
    ///
    /// # Examples
    ///
    /// ```
    /// # use thermo::{Reading, Scale};
    /// let reading = Reading::new(100.0, Scale::Celsius);
    /// ```
    pub fn new(value: f64, scale: Scale) -> Reading {
        Reading {
            value: value,
            scale: scale,
        }
    }

    /// Returns this reading's magnitude.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns this reading's scale.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Converts this reading to the target scale.
    ///
    /// Requesting the scale the reading is already on is an unsupported conversion, not an
    /// identity, and comes back as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use thermo::{Reading, Scale};
    /// let boiling = Reading::new(100.0, Scale::Celsius);
    /// assert_eq!(212.0, boiling.convert_to(Scale::Fahrenheit).unwrap().value());
    /// assert!(boiling.convert_to(Scale::Celsius).is_err());
    /// ```
    pub fn convert_to(&self, target: Scale) -> Result<Reading> {
        convert::convert(self.value, self.scale, target)
            .map(|value| Reading::new(value, target))
            .ok_or(Error::Unsupported(self.scale, target))
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.scale)
    }
}
