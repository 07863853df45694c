use super::*;

#[test]
fn for_path_maps_every_tab_href() {
    for tab in NavTab::ALL {
        assert_eq!(NavTab::for_path(tab.href()), Some(tab));
    }
}

#[test]
fn for_path_maps_email_composer_to_purchase_approval() {
    assert_eq!(NavTab::for_path("/purchase/email/42"), Some(NavTab::PurchaseApproval));
}

#[test]
fn for_path_ignores_trailing_slash() {
    assert_eq!(NavTab::for_path("/vendor/"), Some(NavTab::Vendor));
}

#[test]
fn for_path_rejects_unknown_routes() {
    assert_eq!(NavTab::for_path("/login"), None);
    assert_eq!(NavTab::for_path("/"), None);
    assert_eq!(NavTab::for_path("/purchase"), None);
}
