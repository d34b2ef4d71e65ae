//! Serve the conversion form using Iron.

use std::str::FromStr;

use chrono::Utc;

use handlebars_iron::Template;

use iron::{Handler, status};
use iron::prelude::*;

use serde_json::Value;

use urlencoded::{QueryMap, UrlEncodedQuery};

use Result;
use reading::Reading;
use scale::Scale;

/// The conversion form page.
#[derive(Clone, Copy, Debug)]
pub struct IndexHandler;

impl Handler for IndexHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        let mut response = Response::new();
        response.set_mut(Template::new("index", page_data())).set_mut(status::Ok);
        Ok(response)
    }
}

/// Handles a submitted conversion form.
///
/// The form submits three query parameters: `value`, `from`, and `to`. A missing or non-numeric
/// `value` becomes NaN and flows through the arithmetic and the rendering unchanged, so the user
/// sees it. A bad scale tag or a same-scale pair is reported on the page instead of silently
/// producing nothing.
#[derive(Clone, Copy, Debug)]
pub struct ConvertHandler;

impl Handler for ConvertHandler {
    fn handle(&self, request: &mut Request) -> IronResult<Response> {
        let query = request.get::<UrlEncodedQuery>().unwrap_or_default();
        let value = param(&query, "value").map_or(f64::NAN, |s| {
            s.parse::<f64>().unwrap_or(f64::NAN)
        });
        let from = param(&query, "from").unwrap_or("");
        let to = param(&query, "to").unwrap_or("");
        debug!("converting {} from {:?} to {:?}", value, from, to);

        let mut data = page_data();
        match convert(value, from, to) {
            Ok(reading) => data["result"] = json!(format!("Result: {}", reading)),
            Err(err) => data["error"] = json!(err.to_string()),
        }
        let mut response = Response::new();
        response.set_mut(Template::new("index", data)).set_mut(status::Ok);
        Ok(response)
    }
}

fn convert(value: f64, from: &str, to: &str) -> Result<Reading> {
    let from = Scale::from_str(from)?;
    let to = Scale::from_str(to)?;
    Reading::new(value, from).convert_to(to)
}

fn param<'a>(query: &'a QueryMap, name: &str) -> Option<&'a str> {
    query.get(name).and_then(|values| values.first()).map(|s| s.as_str())
}

fn page_data() -> Value {
    json!({
        "scales": Scale::all().iter().map(|scale| scale.to_string()).collect::<Vec<_>>(),
        "now": Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64;

    use Error;
    use scale::Scale;

    #[test]
    fn form_submission_converts() {
        let reading = convert(100.0, "celsius", "fahrenheit").unwrap();
        assert_eq!("Result: 212.00 fahrenheit", format!("Result: {}", reading));
    }

    #[test]
    fn bad_tag_is_reported_not_swallowed() {
        match convert(100.0, "rankine", "celsius") {
            Err(Error::ParseScale(_)) => {}
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn same_scale_is_reported_not_swallowed() {
        assert_eq!(Err(Error::Unsupported(Scale::Kelvin, Scale::Kelvin)),
                   convert(0.0, "kelvin", "kelvin"));
    }

    #[test]
    fn nan_flows_through_to_the_rendered_string() {
        let reading = convert(f64::NAN, "celsius", "fahrenheit").unwrap();
        assert_eq!("Result: NaN fahrenheit", format!("Result: {}", reading));
    }

    #[test]
    fn page_data_lists_all_scales() {
        let data = page_data();
        assert_eq!(3, data["scales"].as_array().unwrap().len());
        assert_eq!("celsius", data["scales"][0]);
    }
}
