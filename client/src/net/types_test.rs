use super::*;

#[test]
fn employee_accepts_numeric_id_and_ignores_extra_columns() {
    let raw = r#"{"id": 7, "name": "Kim Minji", "department": "Finance", "hired_on": "2021-03-02"}"#;
    let employee: Employee = serde_json::from_str(raw).unwrap();
    assert_eq!(employee.id, "7");
    assert_eq!(employee.department.as_deref(), Some("Finance"));
    assert!(employee.email.is_none());
}

#[test]
fn vendor_accepts_uuid_id() {
    let raw = r#"{"id": "2f1c0a4e-8d55-4c1e-9b1a-0c0f4a1b2c3d", "name": "ACME Corp"}"#;
    let vendor: Vendor = serde_json::from_str(raw).unwrap();
    assert_eq!(vendor.id, "2f1c0a4e-8d55-4c1e-9b1a-0c0f4a1b2c3d");
    assert!(vendor.phone.is_none());
}

#[test]
fn id_rejects_fractional_number() {
    let raw = r#"{"id": 1.5, "name": "x"}"#;
    assert!(serde_json::from_str::<Vendor>(raw).is_err());
}

#[test]
fn purchase_request_defaults_status_to_pending() {
    let raw = r#"{"id": 3, "item": "Laptop"}"#;
    let request: PurchaseRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.status, PurchaseStatus::Pending);
}

#[test]
fn purchase_status_uses_lowercase_wire_names() {
    let raw = r#"{"id": 3, "item": "Laptop", "status": "approved", "amount": 1200.5, "quantity": 2}"#;
    let request: PurchaseRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.status, PurchaseStatus::Approved);
    assert_eq!(request.quantity, Some(2));
    for status in PurchaseStatus::ALL {
        assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(status.as_str()));
    }
}
