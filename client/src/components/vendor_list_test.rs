use super::*;

fn vendor(name: &str, contact: Option<&str>, email: Option<&str>) -> Vendor {
    Vendor {
        id: name.to_lowercase(),
        name: name.to_owned(),
        contact_name: contact.map(str::to_owned),
        contact_email: email.map(str::to_owned),
        phone: None,
    }
}

fn names(vendors: &[&Vendor]) -> Vec<String> {
    vendors.iter().map(|v| v.name.clone()).collect()
}

#[test]
fn query_orders_by_name() {
    assert_eq!(vendor_query().table(), "vendors");
    assert!(vendor_query().query_pairs().contains(&("order".to_owned(), "name.asc".to_owned())));
}

#[test]
fn blank_search_keeps_order() {
    let vendors = vec![vendor("Acme", None, None), vendor("Bolt", None, None)];
    assert_eq!(names(&filter_vendors(&vendors, "  ")), vec!["Acme", "Bolt"]);
}

#[test]
fn search_matches_any_field_case_insensitively() {
    let vendors = vec![
        vendor("Acme", Some("Hong Gildong"), Some("sales@acme.test")),
        vendor("Bolt", None, Some("HELLO@bolt.test")),
        vendor("Cobalt", Some("Park"), None),
    ];
    assert_eq!(names(&filter_vendors(&vendors, "gildong")), vec!["Acme"]);
    assert_eq!(names(&filter_vendors(&vendors, "hello@")), vec!["Bolt"]);
    assert_eq!(names(&filter_vendors(&vendors, "bOlT")), vec!["Bolt"]);
    assert_eq!(names(&filter_vendors(&vendors, "PARK")), vec!["Cobalt"]);
}

#[test]
fn search_handles_hangul() {
    let vendors = vec![vendor("대한상사", None, None), vendor("Acme", None, None)];
    assert_eq!(names(&filter_vendors(&vendors, "대한")), vec!["대한상사"]);
}
