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

use std::{collections::HashMap, sync::Arc};

use log::trace;

use super::prefix_file::PrefixTable;
use crate::{
    carrierclassifier::{errors::InvalidPrefixDataError, ParsedNumber},
    interfaces::{CarrierMapper, NumberBackend},
};

/// Carrier prefix files compiled into the crate, as `(language, content)`.
const CARRIER_DATA: &[(&str, &str)] = &[
    ("en", include_str!("../../resources/carrier/en/237.txt")),
];

/// Carrier mapper backed by libphonenumber carrier prefix files.
///
/// Like libphonenumber's `PhoneNumberToCarrierMapper`, it only names numbers
/// that are valid and whose type can have a carrier; anything else maps to
/// an empty string.
pub struct PrefixCarrierMapper {
    backend: Arc<dyn NumberBackend>,
    tables: HashMap<String, PrefixTable>,
}

impl PrefixCarrierMapper {
    /// Creates a mapper over the compiled-in carrier data.
    ///
    /// # Panics
    /// Panics if the compiled-in data is malformed, which is a bug in the
    /// crate rather than a runtime condition.
    pub fn new(backend: Arc<dyn NumberBackend>) -> Self {
        match Self::from_prefix_data(backend, CARRIER_DATA) {
            Ok(mapper) => mapper,
            Err(err) => {
                let err_message = format!("Could not parse compiled-in carrier data: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    pub fn from_prefix_data(
        backend: Arc<dyn NumberBackend>,
        data: &[(&str, &str)],
    ) -> Result<Self, InvalidPrefixDataError> {
        let mut tables: HashMap<String, PrefixTable> = HashMap::new();
        for (language, content) in data {
            let table = PrefixTable::parse(content)?;
            // Several files of one language are merged in order.
            tables.entry(language.to_string()).or_default().extend(table);
        }
        Ok(Self { backend, tables })
    }

    pub fn supported_languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Same as [`CarrierMapper::get_name_for_number`] but skips the validity
    /// and type checks.
    pub fn get_name_for_valid_number(&self, number: &ParsedNumber, language_code: &str) -> String {
        let Some(table) = self.tables.get(language_code) else {
            trace!("No carrier data for language '{language_code}'");
            return String::new();
        };
        table
            .lookup(&number.to_digits())
            .map(str::to_owned)
            .unwrap_or_default()
    }
}

impl CarrierMapper for PrefixCarrierMapper {
    fn get_name_for_number(&self, number: &ParsedNumber, language_code: &str) -> String {
        if !self.backend.is_valid_number(number) {
            trace!("Number '{}' is invalid, no carrier name", number.national_number());
            return String::new();
        }
        let number_type = self.backend.get_number_type(number);
        if !number_type.can_have_carrier() {
            trace!(
                "Number '{}' of type {:?} can't have a carrier name",
                number.national_number(), number_type
            );
            return String::new();
        }
        self.get_name_for_valid_number(number, language_code)
    }
}
