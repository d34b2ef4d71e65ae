//! Package-wide error handling.

use std::error;
use std::fmt;

use scale::{ParseScaleError, Scale};

/// Our error enum.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Wrapper around `thermo::scale::ParseScaleError`.
    ParseScale(ParseScaleError),
    /// The conversion pair is not one of the six defined pairs.
    ///
    /// The only way to hit this with two well-formed scales is to ask for a same-scale
    /// conversion, which we treat as unsupported rather than as an identity.
    Unsupported(Scale, Scale),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ParseScale(ref err) => write!(f, "{}", err),
            Error::Unsupported(from, to) => write!(f, "unsupported conversion: {} to {}", from, to),
        }
    }
}

impl From<ParseScaleError> for Error {
    fn from(err: ParseScaleError) -> Error {
        Error::ParseScale(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use scale::Scale;

    #[test]
    fn parse_errors_name_the_tag() {
        let err: Error = "rankine".parse::<Scale>().unwrap_err().into();
        assert_eq!("unknown temperature scale: rankine", err.to_string());
    }

    #[test]
    fn unsupported_names_both_scales() {
        let err = Error::Unsupported(Scale::Kelvin, Scale::Kelvin);
        assert_eq!("unsupported conversion: kelvin to kelvin", err.to_string());
    }
}
