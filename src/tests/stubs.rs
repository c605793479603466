use std::collections::HashMap;

use crate::{
    errors::{GetExampleNumberError, ParseError},
    CarrierMapper, NumberBackend, NumberFormat, NumberType, ParsedNumber,
};

const CM_COUNTRY_CODE: u16 = 237;

/// Deterministic backend: every national number is typed from a table, so
/// tests can state exactly what "the library" says about a number.
#[derive(Default)]
pub(super) struct StubBackend {
    types: HashMap<String, NumberType>,
}

impl StubBackend {
    pub fn with_type(mut self, national_number: &str, number_type: NumberType) -> Self {
        self.types.insert(national_number.to_owned(), number_type);
        self
    }

    fn group_national(national_number: &str, separator: char) -> String {
        let mut grouped = String::new();
        let (head, tail) = national_number.split_at(1.min(national_number.len()));
        grouped.push_str(head);
        for pair in tail.as_bytes().chunks(2) {
            grouped.push(separator);
            grouped.push_str(std::str::from_utf8(pair).unwrap());
        }
        grouped
    }
}

impl NumberBackend for StubBackend {
    fn parse(&self, number: &str, region_code: &str) -> Result<ParsedNumber, ParseError> {
        let (trimmed, extension) = match number.split_once("ext") {
            Some((number_part, extension)) => {
                (number_part.trim(), Some(extension.trim_start_matches('.').trim()))
            }
            None => (number.trim(), None),
        };
        let (international, rest) = match trimmed.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let mut digits = String::new();
        for c in rest.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '.' | '(' | ')' => {}
                _ => return Err(ParseError::NotANumber(number.to_owned())),
            }
        }
        if digits.is_empty() {
            return Err(ParseError::NotANumber(number.to_owned()));
        }

        let national_number = if international {
            match digits.strip_prefix("237") {
                Some(national_number) => national_number.to_owned(),
                None => return Err(ParseError::InvalidCountryCode),
            }
        } else if region_code == "CM" {
            digits
        } else {
            return Err(ParseError::InvalidRegionCode(region_code.to_owned()));
        };

        match national_number.len() {
            0..2 => Err(ParseError::TooShortNsn),
            18.. => Err(ParseError::TooLongNsn),
            _ => {
                let parsed = ParsedNumber::new(CM_COUNTRY_CODE, national_number);
                Ok(match extension {
                    Some(extension) => parsed.with_extension(extension),
                    None => parsed,
                })
            }
        }
    }

    fn is_valid_number(&self, number: &ParsedNumber) -> bool {
        number.country_code() == CM_COUNTRY_CODE && number.national_number().len() == 9
    }

    fn get_number_type(&self, number: &ParsedNumber) -> NumberType {
        self.types
            .get(number.national_number())
            .copied()
            .unwrap_or(NumberType::Unknown)
    }

    fn format(&self, number: &ParsedNumber, number_format: NumberFormat) -> String {
        let national_number = number.national_number();
        let extension = number.extension();
        match number_format {
            NumberFormat::E164 => format!("+{}{}", number.country_code(), national_number),
            NumberFormat::International => format!(
                "+{} {}{}",
                number.country_code(),
                Self::group_national(national_number, ' '),
                extension.map(|ext| format!(" ext. {ext}")).unwrap_or_default()
            ),
            NumberFormat::National => format!(
                "{}{}",
                Self::group_national(national_number, ' '),
                extension.map(|ext| format!(" ext. {ext}")).unwrap_or_default()
            ),
            NumberFormat::RFC3966 => format!(
                "tel:+{}-{}{}",
                number.country_code(),
                Self::group_national(national_number, '-'),
                extension.map(|ext| format!(";ext={ext}")).unwrap_or_default()
            ),
        }
    }

    fn get_example_number_for_type(
        &self,
        region_code: &str,
        number_type: NumberType,
    ) -> Result<ParsedNumber, GetExampleNumberError> {
        if region_code != "CM" {
            return Err(GetExampleNumberError::InvalidRegionCode(region_code.to_owned()));
        }
        match number_type {
            NumberType::Mobile => Ok(ParsedNumber::new(CM_COUNTRY_CODE, "671234567")),
            NumberType::FixedLine => Ok(ParsedNumber::new(CM_COUNTRY_CODE, "222123456")),
            _ => Err(GetExampleNumberError::NoExampleNumber),
        }
    }
}

/// Carrier mapper answering from a fixed table of national numbers, in
/// English only.
#[derive(Default)]
pub(super) struct StubCarrierMapper {
    names: HashMap<String, String>,
}

impl StubCarrierMapper {
    pub fn with_name(mut self, national_number: &str, carrier: &str) -> Self {
        self.names.insert(national_number.to_owned(), carrier.to_owned());
        self
    }
}

impl CarrierMapper for StubCarrierMapper {
    fn get_name_for_number(&self, number: &ParsedNumber, language_code: &str) -> String {
        if language_code != "en" {
            return String::new();
        }
        self.names
            .get(number.national_number())
            .cloned()
            .unwrap_or_default()
    }
}
