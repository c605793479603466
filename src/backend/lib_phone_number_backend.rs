// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::{trace, warn};
use phonenumber::{country, metadata::DATABASE, Mode, PhoneNumber, Type};

use crate::{
    carrierclassifier::{
        errors::{GetExampleNumberError, ParseError},
        helper_constants::{EXTENSION_SEPARATOR, PLUS_SIGN},
        NumberFormat, NumberType, ParsedNumber,
    },
    interfaces::NumberBackend,
};

/// [`NumberBackend`] over the `phonenumber` crate and the libphonenumber
/// metadata bundled with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibPhoneNumberBackend;

impl LibPhoneNumberBackend {
    pub fn new() -> Self {
        Self
    }

    fn region_id(region_code: &str) -> Option<country::Id> {
        region_code.parse::<country::Id>().ok()
    }

    fn get_national_significant_number(phone_number: &PhoneNumber) -> String {
        let national = phone_number.national();
        let zeros_start = "0".repeat(national.zeros() as usize);

        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(national.value());

        fast_cat::concat_str!(&zeros_start, national_number)
    }

    /// Rebuilds the library representation from the E.164 digits and the
    /// extension, if any.
    fn to_library_number(number: &ParsedNumber) -> Option<PhoneNumber> {
        let digits = number.to_digits();
        let raw = match number.extension() {
            Some(extension) => fast_cat::concat_str!(PLUS_SIGN, &digits, EXTENSION_SEPARATOR, extension),
            None => fast_cat::concat_str!(PLUS_SIGN, &digits),
        };
        match phonenumber::parse(None, &raw) {
            Ok(phone_number) => Some(phone_number),
            Err(err) => {
                trace!("Number '{raw}' can't be handled by the library: {err}");
                None
            }
        }
    }

    fn from_library_number(phone_number: &PhoneNumber) -> ParsedNumber {
        let parsed = ParsedNumber::new(
            phone_number.code().value(),
            Self::get_national_significant_number(phone_number),
        );
        match phone_number.extension() {
            Some(extension) => parsed.with_extension(extension.to_string()),
            None => parsed,
        }
    }
}

impl NumberBackend for LibPhoneNumberBackend {
    fn parse(&self, number: &str, region_code: &str) -> Result<ParsedNumber, ParseError> {
        let Some(region) = Self::region_id(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return Err(ParseError::InvalidRegionCode(region_code.to_owned()));
        };
        // Full-width and other unicode decimals are read as ASCII digits.
        let normalized = dec_from_char::normalize_decimals(number);
        let phone_number = phonenumber::parse(Some(region), &*normalized)
            .map_err(|err| ParseError::from_library(err, number))?;
        Ok(Self::from_library_number(&phone_number))
    }

    fn is_valid_number(&self, number: &ParsedNumber) -> bool {
        Self::to_library_number(number)
            .is_some_and(|phone_number| phonenumber::is_valid(&phone_number))
    }

    fn get_number_type(&self, number: &ParsedNumber) -> NumberType {
        let Some(phone_number) = Self::to_library_number(number) else {
            return NumberType::Unknown;
        };
        let number_type = match phone_number.number_type(&DATABASE) {
            Type::FixedLine => NumberType::FixedLine,
            Type::Mobile => NumberType::Mobile,
            Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
            Type::TollFree => NumberType::TollFree,
            Type::PremiumRate => NumberType::PremiumRate,
            Type::SharedCost => NumberType::SharedCost,
            Type::Voip => NumberType::VoIP,
            Type::PersonalNumber => NumberType::PersonalNumber,
            Type::Pager => NumberType::Pager,
            Type::Uan => NumberType::UAN,
            Type::Voicemail => NumberType::VoiceMail,
            _ => NumberType::Unknown,
        };
        trace!("Number '{}' has type {:?}", number.national_number(), number_type);
        number_type
    }

    fn format(&self, number: &ParsedNumber, number_format: NumberFormat) -> String {
        let Some(phone_number) = Self::to_library_number(number) else {
            return number.national_number().to_owned();
        };
        let mode = match number_format {
            NumberFormat::E164 => Mode::E164,
            NumberFormat::International => Mode::International,
            NumberFormat::National => Mode::National,
            NumberFormat::RFC3966 => Mode::Rfc3966,
        };
        phone_number.format().mode(mode).to_string()
    }

    fn get_example_number_for_type(
        &self,
        region_code: &str,
        number_type: NumberType,
    ) -> Result<ParsedNumber, GetExampleNumberError> {
        let Some(metadata) = DATABASE.by_id(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return Err(GetExampleNumberError::InvalidRegionCode(region_code.to_owned()));
        };
        let descriptors = metadata.descriptors();
        let descriptor = match number_type {
            NumberType::FixedLine | NumberType::FixedLineOrMobile => descriptors.fixed_line(),
            NumberType::Mobile => descriptors.mobile(),
            NumberType::TollFree => descriptors.toll_free(),
            NumberType::PremiumRate => descriptors.premium_rate(),
            NumberType::SharedCost => descriptors.shared_cost(),
            NumberType::VoIP => descriptors.voip(),
            NumberType::PersonalNumber => descriptors.personal_number(),
            NumberType::Pager => descriptors.pager(),
            NumberType::UAN => descriptors.uan(),
            NumberType::VoiceMail => descriptors.voicemail(),
            NumberType::Unknown => None,
        };
        let Some(example) = descriptor.and_then(|descriptor| descriptor.example()) else {
            return Err(GetExampleNumberError::NoExampleNumber);
        };
        Ok(self.parse(example, region_code)?)
    }
}
