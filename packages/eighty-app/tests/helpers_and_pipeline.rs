//! Integration tests for the app-facing helpers and the page pipeline.

use eighty_app::testing::{FixedClock, MockApp};
use eighty_app::{
    append_80_flag_to_link, convert_24_hour_time, extract_root_domain, finalize_data_type,
    get_80_value, get_number_value, get_price_range_replace, make_link, normalize_price,
    remove_extra_whitespace, strip_80_flag_from_url, AppError, DataType, Page, PagePipeline,
    PriceRange, RecordFinalizer,
};
use proptest::prelude::*;
use regex::Regex;
use serde_json::json;

#[test]
fn test_boundary_scenarios() {
    assert_eq!(convert_24_hour_time("0:00"), "12:00 AM");
    assert_eq!(convert_24_hour_time("24:00"), "12:00 AM");
    assert_eq!(convert_24_hour_time("16:20"), "4:20 PM");

    let cats = Regex::new("cats").unwrap();
    assert_eq!(get_number_value("I have 5 dogs and 3 cats", &cats), "3");

    assert_eq!(
        make_link(Some("www.80legs.com"), Some("/index.html")).as_deref(),
        Some("http://www.80legs.com/index.html")
    );

    assert_eq!(
        PriceRange::to_value_or_empty(get_price_range_replace("$$$", "USD").as_ref()),
        json!({"priceRangeCurrency": "USD", "priceRangeMin": 40, "priceRangeMax": 55})
    );
    assert_eq!(PriceRange::to_value_or_empty(get_price_range_replace("$$$", "CAD").as_ref()), json!({}));

    assert_eq!(normalize_price("123,456,789").as_deref(), Some("123456789.00"));

    assert_eq!(finalize_data_type("locations"), Some(DataType::Business));
    assert_eq!(finalize_data_type("unknownType"), None);
}

#[test]
fn test_resolve_then_flag_then_strip() {
    let link = make_link(Some("https://www.80legs.co.uk/en/index.html"), Some("/prices.html")).unwrap();
    assert_eq!(link, "https://www.80legs.co.uk/prices.html");
    assert_eq!(extract_root_domain(&link), "80legs.co.uk");

    let state = r#"{"category":"Shoes & Boots","page":2}"#;
    let flagged = append_80_flag_to_link(Some(state), Some(&link)).unwrap();
    assert_eq!(get_80_value(&flagged).as_deref(), Some(state));
    assert_eq!(strip_80_flag_from_url(&flagged), link);
}

#[test]
fn test_pipeline_runs_app() {
    let app = MockApp::new()
        .with_record(json!([
            {"data_type": "products", "name": "Boot", "sku": "B-1"},
            {"data_type": "products", "name": "Shoe", "sku": "S-1"}
        ]))
        .with_links(["http://shop.example.com/p/2", "http://shop.example.com/p/2"]);
    let pipeline = PagePipeline::with_finalizer(
        RecordFinalizer::new().with_clock(FixedClock::parse("2021-03-04T05:06:07Z")),
    );
    let page = Page::new("http://shop.example.com/p/1?80flag=cat", "<html></html>");

    let output = pipeline.run(&app, &page).unwrap();

    let records = output.records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["dataType"], json!("product"));
    assert_eq!(records[1]["dateCrawled"], json!("2021-03-04T05:06:00Z"));
    assert_eq!(
        records[1]["skus"],
        json!([{
            "value": "S-1",
            "sourceURLs": ["http://shop.example.com/p/1"]
        }])
    );
    assert_eq!(output.links, vec!["http://shop.example.com/p/2"]);
}

#[test]
fn test_pipeline_surfaces_app_errors() {
    let app = MockApp::new().failing("no listing container");
    let err = PagePipeline::new()
        .run(&app, &Page::new("http://a.com/", ""))
        .unwrap_err();
    assert!(matches!(err, AppError::ProcessDocument { .. }));
    assert!(err.to_string().contains("no listing container"));
}

proptest! {
    #[test]
    fn prop_remove_extra_whitespace_idempotent(text in "\\PC*") {
        let once = remove_extra_whitespace(&text);
        prop_assert_eq!(remove_extra_whitespace(&once), once);
    }

    #[test]
    fn prop_flag_round_trip_with_reserved_characters(value in "[ &?=#%/+:;,@a-z]{1,30}") {
        let flagged = append_80_flag_to_link(Some(&value), Some("http://www.example.com/a?b=c")).unwrap();
        prop_assert_eq!(get_80_value(&flagged), Some(value));
    }
}
