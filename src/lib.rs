//! Thermo converts temperatures between Celsius, Fahrenheit, and Kelvin, and serves a small web
//! form that does the converting.

#![deny(missing_docs, missing_debug_implementations, missing_copy_implementations,
        trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features,
        unused_import_braces, unused_qualifications)]

extern crate chrono;
extern crate handlebars_iron;
extern crate iron;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;
extern crate urlencoded;

pub mod convert;
pub mod error;
pub mod reading;
pub mod scale;
pub mod server;
pub mod units;

pub use error::Error;
pub use reading::Reading;
pub use scale::Scale;

/// Our custom result type.
pub type Result<T> = std::result::Result<T, Error>;
