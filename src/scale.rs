//! Temperature scales and the string tags the form submits for them.

use std::error;
use std::fmt;
use std::str::FromStr;

/// One of the three temperature scales we can convert between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
}

impl Scale {
    /// Returns all three scales, in the order they appear in the form's selects.
    ///
    /// # Examples
    ///
    /// ```
    /// # use thermo::Scale;
    /// assert_eq!(3, Scale::all().len());
    /// ```
    pub fn all() -> [Scale; 3] {
        [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin]
    }

    /// Returns the lowercase tag for this scale, as submitted by the form and used as the
    /// rendering label.
    ///
    /// # Examples
    ///
    /// ```
    /// # use thermo::Scale;
    /// assert_eq!("fahrenheit", Scale::Fahrenheit.tag());
    /// ```
    pub fn tag(&self) -> &'static str {
        match *self {
            Scale::Celsius => "celsius",
            Scale::Fahrenheit => "fahrenheit",
            Scale::Kelvin => "kelvin",
        }
    }
}

impl FromStr for Scale {
    type Err = ParseScaleError;
    fn from_str(s: &str) -> Result<Scale, ParseScaleError> {
        match s {
            "celsius" => Ok(Scale::Celsius),
            "fahrenheit" => Ok(Scale::Fahrenheit),
            "kelvin" => Ok(Scale::Kelvin),
            _ => Err(ParseScaleError { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// The string was not one of the three recognized scale tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseScaleError {
    tag: String,
}

impl error::Error for ParseScaleError {}

impl fmt::Display for ParseScaleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown temperature scale: {}", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags() {
        assert_eq!(Ok(Scale::Celsius), "celsius".parse());
        assert_eq!(Ok(Scale::Fahrenheit), "fahrenheit".parse());
        assert_eq!(Ok(Scale::Kelvin), "kelvin".parse());
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert!("rankine".parse::<Scale>().is_err());
        assert!("Celsius".parse::<Scale>().is_err());
        assert!("".parse::<Scale>().is_err());
    }

    #[test]
    fn display_is_the_lowercase_tag() {
        assert_eq!("celsius", Scale::Celsius.to_string());
        assert_eq!("kelvin", Scale::Kelvin.to_string());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for scale in Scale::all().iter() {
            assert_eq!(Ok(*scale), scale.to_string().parse());
        }
    }
}
