//! Demand forecast request/response types and form validation

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Comma-separated digit groups, e.g. "10,20,30". A trailing comma is
/// tolerated.
static SALES_DATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+,?)+$").unwrap());

/// Body for `POST /api/forecast`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    pub product: String,
    pub current_stock: i64,
    /// Comma-separated monthly sales history, passed through verbatim.
    pub sales_data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub product: String,
    pub forecast: Vec<f64>,
}

/// Per-field validation errors for the forecast form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub product: Option<&'static str>,
    pub current_stock: Option<&'static str>,
    pub sales_data: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.product.is_none() && self.current_stock.is_none() && self.sales_data.is_none()
    }
}

/// Validate the raw form fields. Runs entirely client-side; a request is
/// only built when every field passes.
pub fn validate(
    product: &str,
    current_stock: &str,
    sales_data: &str,
) -> Result<ForecastRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    if product.trim().is_empty() {
        errors.product = Some("required");
    }

    let stock = if current_stock.trim().is_empty() {
        errors.current_stock = Some("required");
        0
    } else {
        match current_stock.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                errors.current_stock = Some("must be a number");
                0
            }
        }
    };

    if sales_data.trim().is_empty() {
        errors.sales_data = Some("required");
    } else if !SALES_DATA_RE.is_match(sales_data.trim()) {
        errors.sales_data = Some("must be comma-separated numbers");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ForecastRequest {
        product: product.trim().to_string(),
        current_stock: stock,
        sales_data: sales_data.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_passes() {
        let req = validate("Flour", "40", "10,20,30").unwrap();
        assert_eq!(req.product, "Flour");
        assert_eq!(req.current_stock, 40);
        assert_eq!(req.sales_data, "10,20,30");
    }

    #[test]
    fn test_non_numeric_sales_data_rejected() {
        let errors = validate("Flour", "40", "10,abc").unwrap_err();
        assert_eq!(errors.sales_data, Some("must be comma-separated numbers"));
        assert!(errors.product.is_none());
        assert!(errors.current_stock.is_none());
    }

    #[test]
    fn test_missing_fields_reported_together() {
        let errors = validate("", "", "").unwrap_err();
        assert_eq!(errors.product, Some("required"));
        assert_eq!(errors.current_stock, Some("required"));
        assert_eq!(errors.sales_data, Some("required"));
    }

    #[test]
    fn test_non_numeric_stock_rejected() {
        let errors = validate("Flour", "lots", "1,2").unwrap_err();
        assert_eq!(errors.current_stock, Some("must be a number"));
    }

    #[test]
    fn test_trailing_comma_tolerated() {
        assert!(validate("Flour", "1", "10,20,").is_ok());
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let req = validate("Flour", "40", "10,20,30").unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("currentStock").is_some());
        assert!(json.get("salesData").is_some());
    }
}
