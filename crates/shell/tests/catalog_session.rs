use std::io::Cursor;

use storefront_catalog::{CatalogComponent, CatalogFacade};
use storefront_core::OutputFormat;
use storefront_shell::{catalog_shell, Prompter};

struct Session {
    catalog: CatalogFacade,
    output: String,
}

fn run_session(script: &str, format: OutputFormat) -> Session {
    run_bytes(script.as_bytes(), format)
}

fn run_bytes(script: &[u8], format: OutputFormat) -> Session {
    let mut catalog = CatalogFacade::new();
    let mut prompter = Prompter::new(Cursor::new(script.to_vec()), Vec::new());
    catalog_shell::run(&mut catalog, &mut prompter, format).expect("session failed");
    let output = String::from_utf8(prompter.into_output()).expect("output is utf-8");
    Session { catalog, output }
}

#[test]
fn full_session_builds_bundles_and_discounts() {
    let script = concat!(
        "1\nMouse\nA\n10\n",
        "Add Product Bundle\nCombo\nB1\nA\nZ\n\n",
        "3\nSale\n20\nA\n",
        "3\nGhost\n10\nQ\n",
        "4\n5\n6\n",
        "Exit\n",
    );
    let session = run_session(script, OutputFormat::Table);
    let out = &session.output;

    assert!(out.contains("Added Product: Mouse (Price: $10.00)"));
    assert!(out.contains("warning: no product found with provided code Z; left out of the bundle"));
    assert!(out.contains("Added bundle Combo with 1 item(s), total $10.00"));
    assert!(out.contains("Special Offer: Sale (Discount: 20%)   -  product code:(A) (now $80.00)"));
    assert!(out.contains("warning: no product found with provided code Q"));

    let catalog = &session.catalog;
    assert_eq!(catalog.products().len(), 1);
    assert_eq!(catalog.bundles().len(), 1);
    assert_eq!(catalog.discounts().len(), 1);
    assert_eq!(catalog.find_bundle("B1").unwrap().len(), 1);
    assert!((catalog.find_discount("A").unwrap().price().amount() - 80.0).abs() < 1e-9);
}

#[test]
fn listings_are_printed_in_requested_order() {
    let script = "1\nMouse\nA\n10\n1\nPad\nP\n5\n4\n7\n";
    let session = run_session(script, OutputFormat::Table);
    let out = &session.output;

    let mouse = out.rfind("Mouse").unwrap();
    let pad = out.rfind("Pad").unwrap();
    assert!(mouse < pad);
    assert!(out.contains("Code"));
    assert!(out.contains("Price"));
}

#[test]
fn empty_listings_show_placeholder() {
    let session = run_session("4\n5\n6\n7\n", OutputFormat::Table);
    assert_eq!(session.output.matches("(none)").count(), 3);
}

#[test]
fn json_output_prints_rows_as_json() {
    let session = run_session("1\nMouse\nA\n12.5\nget all products\nexit\n", OutputFormat::Json);
    assert!(session.output.contains("\"code\": \"A\""));
    assert!(session.output.contains("\"price\": 12.5"));
}

#[test]
fn invalid_price_is_asked_again() {
    let session = run_session("1\nMouse\nA\ncheap\n3\n7\n", OutputFormat::Table);
    assert!(session.output.contains("warning: price must be a number"));
    assert_eq!(session.catalog.products()[0].price().amount(), 3.0);
}

#[test]
fn unknown_menu_choice_resumes_menu() {
    let session = run_session("9\nlist everything\n7\n", OutputFormat::Table);
    assert_eq!(session.output.matches("warning: unknown choice").count(), 2);
}

#[test]
fn end_of_input_mid_action_ends_cleanly_without_registering() {
    let session = run_session("1\nMouse\n", OutputFormat::Table);
    assert!(session.catalog.products().is_empty());
}

#[test]
fn end_of_input_inside_bundle_codes_discards_the_bundle() {
    let session = run_session("1\nMouse\nA\n10\n2\nCombo\nB1\nA\n", OutputFormat::Table);
    assert_eq!(session.catalog.products().len(), 1);
    assert!(session.catalog.bundles().is_empty());
}

#[test]
fn bundle_with_no_codes_is_still_created() {
    let session = run_session("2\nEmpty\nB0\n\n5\n7\n", OutputFormat::Table);
    assert!(session.output.contains("Added bundle Empty with 0 item(s), total $0.00"));
    assert_eq!(session.catalog.bundles().len(), 1);
}

#[test]
fn out_of_range_discount_is_accepted() {
    let session = run_session("1\nHeadphones\nA\n100\n3\nOver\n150\nA\n7\n", OutputFormat::Table);
    assert!(session.output.contains("(now $-50.00)"));
}

#[test]
fn non_utf8_line_does_not_end_the_session() {
    let mut script = b"1\nMouse\nA\n10\n1\n".to_vec();
    script.extend_from_slice(b"caf\xe9\nC\n4\n4\n7\n");
    let session = run_bytes(&script, OutputFormat::Table);

    assert_eq!(session.catalog.products().len(), 2);
    assert_eq!(session.catalog.find_product("C").unwrap().name(), "caf\u{FFFD}");
    assert!(session.output.contains("Added Product: caf\u{FFFD} (Price: $4.00)"));
    assert!(session.output.contains("Mouse"));
}

#[test]
fn zero_priced_product_with_deep_discount_shows_zero() {
    let session = run_session("1\nFreebie\nF\n0\n3\nOver\n150\nF\n7\n", OutputFormat::Table);
    assert!(session.output.contains("(now $0.00)"));
    assert!(!session.output.contains("$-0.00"));
}
