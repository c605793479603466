use crate::carrierclassifier::{
    errors::{GetExampleNumberError, ParseError},
    NumberFormat, NumberType, ParsedNumber,
};

/// Internal matching API used to isolate the underlying implementation of
/// the national number matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only
    /// decimal digits) matches `number_pattern` as a whole.
    fn match_national_number(&self, number: &str, number_pattern: &str) -> bool;
}

/// Phone number library used for everything except carrier detection:
/// parsing, validation, line type classification and formatting.
pub trait NumberBackend: Send + Sync {
    /// Parses `number`, assuming `region_code` when it carries no country
    /// calling code.
    fn parse(&self, number: &str, region_code: &str) -> Result<ParsedNumber, ParseError>;

    fn is_valid_number(&self, number: &ParsedNumber) -> bool;

    fn get_number_type(&self, number: &ParsedNumber) -> NumberType;

    /// Formats `number`. Numbers the library can't format come back as their
    /// national significant number with no formatting applied.
    fn format(&self, number: &ParsedNumber, number_format: NumberFormat) -> String;

    fn get_example_number_for_type(
        &self,
        region_code: &str,
        number_type: NumberType,
    ) -> Result<ParsedNumber, GetExampleNumberError>;
}

/// Maps a number to the name of the carrier it was originally allocated to.
pub trait CarrierMapper: Send + Sync {
    /// Returns the carrier name in `language_code`, or an empty string when
    /// the number is invalid or no carrier is known for it.
    fn get_name_for_number(&self, number: &ParsedNumber, language_code: &str) -> String;
}
