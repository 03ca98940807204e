//! Supplier records mirrored from the backend

use serde::{Deserialize, Serialize};

/// Supplier status label. The wire carries free strings; anything the
/// backend sends that we do not recognize collapses to `Active`, the
/// backend's own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl From<String> for SupplierStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Inactive" | "inactive" => SupplierStatus::Inactive,
            "Pending" | "pending" => SupplierStatus::Pending,
            _ => SupplierStatus::Active,
        }
    }
}

impl SupplierStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "Active",
            SupplierStatus::Inactive => "Inactive",
            SupplierStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub supplier_name: String,
    #[serde(default = "default_contact")]
    pub contact_person: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_phone")]
    pub phone_number: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_items_provided")]
    pub items_provided: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub status: SupplierStatus,
}

fn default_contact() -> String {
    "Not specified".to_string()
}

fn default_email() -> String {
    "No email".to_string()
}

fn default_phone() -> String {
    "No phone".to_string()
}

fn default_address() -> String {
    "Address not provided".to_string()
}

fn default_items_provided() -> String {
    "Various items".to_string()
}

/// Body for `POST /suppliers/` and `PUT /suppliers/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub supplier_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub items_provided: String,
    pub rating: f64,
    pub status: SupplierStatus,
}

impl From<&Supplier> for SupplierDraft {
    fn from(s: &Supplier) -> Self {
        Self {
            supplier_name: s.supplier_name.clone(),
            contact_person: s.contact_person.clone(),
            email: s.email.clone(),
            phone_number: s.phone_number.clone(),
            address: s.address.clone(),
            items_provided: s.items_provided.clone(),
            rating: s.rating,
            status: s.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_defaults() {
        let s: Supplier =
            serde_json::from_str(r#"{"id": 1, "supplierName": "Acme"}"#).unwrap();
        assert_eq!(s.contact_person, "Not specified");
        assert_eq!(s.email, "No email");
        assert_eq!(s.phone_number, "No phone");
        assert_eq!(s.address, "Address not provided");
        assert_eq!(s.items_provided, "Various items");
        assert_eq!(s.rating, 0.0);
        assert_eq!(s.status, SupplierStatus::Active);
    }

    #[test]
    fn test_status_unknown_string_falls_back_to_active() {
        let s: Supplier = serde_json::from_str(
            r#"{"id": 2, "supplierName": "Beta", "status": "on holiday"}"#,
        )
        .unwrap();
        assert_eq!(s.status, SupplierStatus::Active);
    }

    #[test]
    fn test_status_known_strings() {
        let s: Supplier = serde_json::from_str(
            r#"{"id": 3, "supplierName": "Gamma", "status": "Inactive"}"#,
        )
        .unwrap();
        assert_eq!(s.status, SupplierStatus::Inactive);
        assert_eq!(s.status.label(), "Inactive");
    }
}
