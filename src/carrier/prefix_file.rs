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

use std::collections::BTreeMap;

use crate::carrierclassifier::errors::InvalidPrefixDataError;

/// Carrier names keyed by number prefix, read from a libphonenumber prefix
/// file (`resources/carrier/<lang>/<country code>.txt`).
///
/// Each line is `prefix|description`; blank lines and lines starting with
/// `#` are skipped. Prefixes include the country calling code.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PrefixTable {
    prefixes: BTreeMap<String, String>,
    max_prefix_len: usize,
}

impl PrefixTable {
    pub fn parse(content: &str) -> Result<Self, InvalidPrefixDataError> {
        let mut table = Self::default();

        for (index, line) in content.lines().enumerate() {
            let line_num = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((prefix_str, desc)) = line.split_once('|') else {
                return Err(InvalidPrefixDataError::MissingCarrierName { line_num });
            };
            let prefix_str = prefix_str.trim();
            if prefix_str.is_empty() {
                return Err(InvalidPrefixDataError::MissingPrefix { line_num });
            }
            if desc.trim().is_empty() {
                return Err(InvalidPrefixDataError::MissingCarrierName { line_num });
            }
            let prefix_code: u64 = prefix_str.parse().map_err(|e| InvalidPrefixDataError::PrefixParseError {
                line_num,
                prefix: prefix_str.to_string(),
                source: e,
            })?;

            let mut buf = itoa::Buffer::new();
            let prefix = buf.format(prefix_code).to_owned();
            table.max_prefix_len = table.max_prefix_len.max(prefix.len());
            table.prefixes.insert(prefix, desc.trim().to_string());
        }

        Ok(table)
    }

    /// Description of the longest prefix of `digits` present in the table.
    pub fn lookup(&self, digits: &str) -> Option<&str> {
        let longest = self.max_prefix_len.min(digits.len());
        (1..=longest)
            .rev()
            .filter(|len| digits.is_char_boundary(*len))
            .find_map(|len| self.prefixes.get(&digits[..len]))
            .map(String::as_str)
    }

    /// Adds all entries of `other`, overriding duplicated prefixes.
    pub fn extend(&mut self, other: PrefixTable) {
        self.max_prefix_len = self.max_prefix_len.max(other.max_prefix_len);
        self.prefixes.extend(other.prefixes);
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
