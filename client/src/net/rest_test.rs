use super::*;

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn default_query_selects_everything() {
    let query = TableQuery::from_table("vendors");
    assert_eq!(query.table(), "vendors");
    assert_eq!(query.query_pairs(), pairs(&[("select", "*")]));
}

#[test]
fn query_pairs_follow_builder_order() {
    let query = TableQuery::from_table("purchase_requests")
        .select("id,item,status")
        .eq("status", "pending")
        .eq("vendor", "ACME")
        .order("created_at", SortOrder::Desc)
        .limit(20);
    assert_eq!(
        query.query_pairs(),
        pairs(&[
            ("select", "id,item,status"),
            ("status", "eq.pending"),
            ("vendor", "eq.ACME"),
            ("order", "created_at.desc"),
            ("limit", "20"),
        ])
    );
}

#[test]
fn filter_pairs_exclude_select_and_order() {
    let query = TableQuery::from_table("purchase_requests")
        .select("id")
        .eq("id", 42)
        .order("id", SortOrder::Asc);
    assert_eq!(query.filter_pairs(), pairs(&[("id", "eq.42")]));
}

#[test]
fn endpoint_uses_rest_base() {
    let config = BackendConfig::new("https://abcd.supabase.co", "anon");
    assert_eq!(TableQuery::from_table("employees").endpoint(&config), "https://abcd.supabase.co/rest/v1/employees");
}

#[test]
fn fetch_rows_is_unavailable_on_server() {
    let auth = HostedAuth::new(BackendConfig::default());
    let result = futures::executor::block_on(fetch_rows::<serde_json::Value>(&auth, &TableQuery::from_table("vendors")));
    assert!(matches!(result, Err(BackendError::Unavailable(_))));
}
