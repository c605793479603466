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

use std::{borrow::Cow, sync::Arc};

use log::trace;
use rand::Rng;

use super::{
    config::ClassifierConfig,
    enums::{CarrierLabel, NumberFormat, NumberType},
    errors::{GetExampleNumberError, ParseError},
    helper_constants::{
        CAMTEL_NUMBER_PATTERN, MOBILE_CAMTEL_NUMBER_PATTERN, UNIQUE_SUFFIX_LENGTH,
        YOOMEE_NUMBER_PATTERN,
    },
    helper_types::{NumberInput, ParsedNumber},
};
use crate::{
    backend::LibPhoneNumberBackend,
    carrier::PrefixCarrierMapper,
    interfaces::{CarrierMapper, MatcherApi, NumberBackend},
    regex_based_matcher::RegexBasedMatcher,
};

/// Detects the carrier of Cameroonian phone numbers.
///
/// Carrier data from libphonenumber takes precedence. Ranges it doesn't map
/// (the CAMTEL fixed-line, CDMA and mobile prefixes) are recognised with
/// local prefix rules on the national significant number.
pub struct CarrierClassifier {
    config: ClassifierConfig,

    /// Parsing, validation, typing and formatting.
    backend: Arc<dyn NumberBackend>,

    /// Known carrier names, consulted before the local prefix rules.
    carrier_mapper: Arc<dyn CarrierMapper>,

    /// An API for matching the local prefix rules.
    matcher_api: Box<dyn MatcherApi>,
}

impl Default for CarrierClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CarrierClassifier {
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Classifier over the `phonenumber` crate and the compiled-in carrier
    /// data.
    pub fn with_config(config: ClassifierConfig) -> Self {
        let backend: Arc<dyn NumberBackend> = Arc::new(LibPhoneNumberBackend::new());
        let carrier_mapper = Arc::new(PrefixCarrierMapper::new(backend.clone()));
        Self::with_parts(config, backend, carrier_mapper)
    }

    pub fn with_parts(
        config: ClassifierConfig,
        backend: Arc<dyn NumberBackend>,
        carrier_mapper: Arc<dyn CarrierMapper>,
    ) -> Self {
        Self {
            config,
            backend,
            carrier_mapper,
            matcher_api: Box::new(RegexBasedMatcher::new()),
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn backend(&self) -> &dyn NumberBackend {
        self.backend.as_ref()
    }

    pub fn carrier_mapper(&self) -> &dyn CarrierMapper {
        self.carrier_mapper.as_ref()
    }

    /// Parses `number` assuming the configured default region.
    pub fn parse(&self, number: &str) -> Result<ParsedNumber, ParseError> {
        self.parse_for_region(number, &self.config.default_region)
    }

    pub fn parse_for_region(&self, number: &str, region_code: &str) -> Result<ParsedNumber, ParseError> {
        self.backend.parse(number, region_code)
    }

    fn resolve<'a>(&self, number: NumberInput<'a>) -> Result<Cow<'a, ParsedNumber>, ParseError> {
        match number {
            NumberInput::Raw(raw) => Ok(Cow::Owned(self.parse(raw)?)),
            NumberInput::Parsed(parsed) => Ok(Cow::Borrowed(parsed)),
        }
    }

    /// Gets the name of the carrier of `number` in the configured default
    /// language.
    ///
    /// Returns an empty string when no carrier is known. Strings that can't
    /// be parsed are an error.
    pub fn get_carrier_for_number<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<String, ParseError> {
        self.get_carrier_for_number_in_language(number, &self.config.default_language)
    }

    pub fn get_carrier_for_number_in_language<'a>(
        &self,
        number: impl Into<NumberInput<'a>>,
        language_code: &str,
    ) -> Result<String, ParseError> {
        let number = self.resolve(number.into())?;

        let carrier = self.carrier_mapper.get_name_for_number(&number, language_code);
        if !carrier.is_empty() {
            trace!("Carrier data maps '{}' to {}", number.national_number(), carrier);
            return Ok(carrier);
        }

        // Detection for numbers the carrier data leaves unmapped.
        match self.get_fallback_carrier(&number) {
            Some(label) => {
                trace!("Prefix rules map '{}' to {}", number.national_number(), label);
                Ok(label.into())
            }
            None => {
                trace!("No carrier known for '{}'", number.national_number());
                Ok(String::new())
            }
        }
    }

    fn get_fallback_carrier(&self, number: &ParsedNumber) -> Option<CarrierLabel> {
        if !self.is_camtel_number(number) {
            return None;
        }
        // Yoomee is under CAMTEL and is only reported when asked for.
        if self.config.distinguish_yoomee && self.is_yoomee_number(number) {
            return Some(CarrierLabel::Yoomee);
        }
        Some(CarrierLabel::Camtel)
    }

    fn matches_national_number(&self, number: &ParsedNumber, pattern: &str) -> bool {
        self.matcher_api.match_national_number(number.national_number(), pattern)
    }

    /// 222, 233 (fixed line), 242, 243 (CDMA) or 620 (mobile) followed by
    /// exactly six digits.
    pub fn is_camtel_number(&self, number: &ParsedNumber) -> bool {
        self.matches_national_number(number, CAMTEL_NUMBER_PATTERN)
    }

    /// 2429 followed by exactly five digits.
    pub fn is_yoomee_number(&self, number: &ParsedNumber) -> bool {
        self.matches_national_number(number, YOOMEE_NUMBER_PATTERN)
    }

    pub fn is_mobile_camtel_number(&self, number: &ParsedNumber) -> bool {
        self.matches_national_number(number, MOBILE_CAMTEL_NUMBER_PATTERN)
    }

    pub fn is_fixed_line_number(&self, number: &ParsedNumber) -> bool {
        self.backend.get_number_type(number) == NumberType::FixedLine
    }

    /// Mobile according to the library, or in the mobile range of CAMTEL.
    pub fn is_mobile_number(&self, number: &ParsedNumber) -> bool {
        if self.backend.get_number_type(number) == NumberType::Mobile {
            return true;
        }
        self.is_camtel_number(number) && self.is_mobile_camtel_number(number)
    }

    /// Formats `number`. Strings that can't be parsed give `None` rather
    /// than an error.
    pub fn format<'a>(&self, number: impl Into<NumberInput<'a>>, number_format: NumberFormat) -> Option<String> {
        let number = match self.resolve(number.into()) {
            Ok(number) => number,
            Err(err) => {
                trace!("Can't format unparsable number: {err}");
                return None;
            }
        };
        Some(self.backend.format(&number, number_format))
    }

    /// [`Self::format`] without spaces, e.g. `676769251` instead of
    /// `6 76 76 92 51`. Some SMS gateways reject numbers containing spaces.
    pub fn format_and_remove_spaces<'a>(
        &self,
        number: impl Into<NumberInput<'a>>,
        number_format: NumberFormat,
    ) -> Option<String> {
        self.format(number, number_format)
            .map(|formatted| formatted.replace(' ', ""))
    }

    /// Example mobile number of `region_code` as country calling code
    /// followed by the national number, e.g. `237671234567`.
    pub fn get_example_mobile_number(&self, region_code: &str) -> Result<String, GetExampleNumberError> {
        let example = self.backend.get_example_number_for_type(region_code, NumberType::Mobile)?;
        Ok(example.to_digits())
    }

    /// [`Self::get_example_mobile_number`] with the last four digits replaced
    /// by random ones. Two calls are unlikely, not guaranteed, to differ.
    pub fn get_unique_example_mobile_number(&self, region_code: &str) -> Result<String, GetExampleNumberError> {
        let mobile_number = self.get_example_mobile_number(region_code)?;
        let keep = mobile_number.len().saturating_sub(UNIQUE_SUFFIX_LENGTH);

        let mut rng = rand::rng();
        let mut unique = String::with_capacity(keep + UNIQUE_SUFFIX_LENGTH);
        unique.push_str(&mobile_number[..keep]);
        for _ in 0..UNIQUE_SUFFIX_LENGTH {
            unique.push(char::from(b'0' + rng.random_range(0..10u8)));
        }
        Ok(unique)
    }
}
