use std::sync::Arc;

use super::{init_logger, stubs::StubBackend};
use crate::{
    errors::InvalidPrefixDataError, CarrierMapper, NumberType, ParsedNumber, PrefixCarrierMapper,
};

fn get_mapper() -> PrefixCarrierMapper {
    init_logger();
    let backend = StubBackend::default()
        .with_type("671234567", NumberType::Mobile)
        .with_type("655123456", NumberType::Mobile)
        .with_type("661234567", NumberType::FixedLineOrMobile)
        .with_type("691234567", NumberType::Pager)
        .with_type("620123456", NumberType::Mobile)
        .with_type("222123456", NumberType::FixedLine)
        .with_type("800123456", NumberType::TollFree);
    PrefixCarrierMapper::new(Arc::new(backend))
}

fn cm(national_number: &str) -> ParsedNumber {
    ParsedNumber::new(237, national_number)
}

#[test]
fn compiled_in_data_names_cameroon_carriers() {
    let mapper = get_mapper();
    assert_eq!(mapper.get_name_for_number(&cm("671234567"), "en"), "MTN Cameroon");
    assert_eq!(mapper.get_name_for_number(&cm("655123456"), "en"), "Orange");
    assert_eq!(mapper.get_name_for_number(&cm("661234567"), "en"), "NEXTTEL");
    assert_eq!(mapper.get_name_for_number(&cm("691234567"), "en"), "Orange");
    assert_eq!(mapper.supported_languages().collect::<Vec<_>>(), vec!["en"]);
}

#[test]
fn camtel_ranges_are_not_in_carrier_data() {
    let mapper = get_mapper();
    assert_eq!(mapper.get_name_for_number(&cm("620123456"), "en"), "");
    assert_eq!(mapper.get_name_for_valid_number(&cm("222123456"), "en"), "");
}

#[test]
fn only_valid_numbers_of_carrier_types_are_named() {
    let mapper = get_mapper();
    // Fixed-line numbers can be ported, so carrier data doesn't name them.
    assert_eq!(mapper.get_name_for_number(&cm("222123456"), "en"), "");
    assert_eq!(mapper.get_name_for_number(&cm("800123456"), "en"), "");
    // Unknown type.
    assert_eq!(mapper.get_name_for_number(&cm("651234567"), "en"), "");
    // Invalid length.
    assert_eq!(mapper.get_name_for_number(&cm("67123456"), "en"), "");
    assert_eq!(mapper.get_name_for_valid_number(&cm("651234567"), "en"), "MTN Cameroon");
}

#[test]
fn unknown_language_gives_empty_name() {
    let mapper = get_mapper();
    assert_eq!(mapper.get_name_for_number(&cm("671234567"), "fr"), "");
}

#[test]
fn custom_prefix_data() {
    let backend = Arc::new(StubBackend::default().with_type("671234567", NumberType::Mobile));
    let mapper = PrefixCarrierMapper::from_prefix_data(
        backend,
        &[("en", "23767|MTN Cameroon\n"), ("fr", "23767|MTN Cameroun\n"), ("en", "237671|Other\n")],
    )
    .unwrap();
    assert_eq!(mapper.get_name_for_number(&cm("671234567"), "en"), "Other");
    assert_eq!(mapper.get_name_for_number(&cm("671234567"), "fr"), "MTN Cameroun");
}

#[test]
fn malformed_prefix_data_is_rejected() {
    let result = PrefixCarrierMapper::from_prefix_data(
        Arc::new(StubBackend::default()),
        &[("en", "23767|MTN Cameroon\nabc|Broken\n")],
    );
    assert!(matches!(
        result,
        Err(InvalidPrefixDataError::PrefixParseError { line_num: 2, .. })
    ));
}
