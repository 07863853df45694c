use super::*;

#[test]
fn defaults_match_fixed_filenames_and_vendor_columns() {
    let cli = Cli::try_parse_from(["csv-clean"]).unwrap();
    assert_eq!(cli.input, PathBuf::from("input.csv"));
    assert_eq!(cli.output, PathBuf::from("output.csv"));
    assert_eq!(cli.columns, vec!["구매업체".to_owned(), "판매업체".to_owned()]);
}

#[test]
fn repeated_column_flag_replaces_defaults() {
    let cli = Cli::try_parse_from(["csv-clean", "--input", "a.csv", "--column", "vendor", "--column", "buyer"]).unwrap();
    assert_eq!(cli.input, PathBuf::from("a.csv"));
    assert_eq!(cli.columns, vec!["vendor".to_owned(), "buyer".to_owned()]);
}
