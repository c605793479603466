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

/// A successfully parsed phone number.
///
/// The national significant number is kept as a digit string, so leading
/// zeros survive and prefix rules can run on it directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedNumber {
    country_code: u16,
    national_number: String,
    extension: Option<String>,
}

impl ParsedNumber {
    pub fn new(country_code: u16, national_number: impl Into<String>) -> Self {
        Self { country_code, national_number: national_number.into(), extension: None }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    /// National significant number, digits only.
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    /// Extension dialled after the number, e.g. `12` for `671234567 ext 12`.
    /// Never part of [`Self::to_digits`].
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Country calling code followed by the national significant number,
    /// e.g. `237671234567`.
    pub fn to_digits(&self) -> String {
        let mut buf = itoa::Buffer::new();
        let country_code = buf.format(self.country_code);
        fast_cat::concat_str!(country_code, &self.national_number)
    }
}

/// Either a raw string that still has to be parsed or an already parsed
/// number. Lets operations accept both without duplicating their API.
#[derive(Debug, Clone, Copy)]
pub enum NumberInput<'a> {
    Raw(&'a str),
    Parsed(&'a ParsedNumber),
}

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(value: &'a str) -> Self {
        NumberInput::Raw(value)
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    fn from(value: &'a String) -> Self {
        NumberInput::Raw(value.as_str())
    }
}

impl<'a> From<&'a ParsedNumber> for NumberInput<'a> {
    fn from(value: &'a ParsedNumber) -> Self {
        NumberInput::Parsed(value)
    }
}
