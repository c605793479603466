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

use std::num::ParseIntError;

use thiserror::Error;

/// The input could not be read as a phone number for the given region.
/// This is the only error carrier lookup propagates.
#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("Invalid region code: {0}")]
    InvalidRegionCode(String),
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("Not a number: {0}")]
    NotANumber(String),
    #[error("Too short after idd")]
    TooShortAfterIdd,
    #[error("Too short Nsn")]
    TooShortNsn,
    #[error("Too long nsn")]
    TooLongNsn,
}

#[derive(Debug, PartialEq, Error)]
pub enum GetExampleNumberError {
    #[error("Parse error: {0}")]
    FailedToParse(#[from] ParseError),
    #[error("No example number")]
    NoExampleNumber,
    #[error("Invalid region code provided: {0}")]
    InvalidRegionCode(String),
}

#[derive(Debug, PartialEq, Error)]
pub enum InvalidPrefixDataError {
    #[error("Failed to parse prefix '{prefix}' on line {line_num}: {source}")]
    PrefixParseError {
        line_num: usize,
        prefix: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Line {line_num} has no prefix")]
    MissingPrefix { line_num: usize },
    #[error("Line {line_num} has no carrier name")]
    MissingCarrierName { line_num: usize },
}

impl ParseError {
    /// Maps a library parse failure. Input the library doesn't see as a
    /// number at all is reported as `NotANumber` with the original `input`.
    pub(crate) fn from_library(err: phonenumber::ParseError, input: &str) -> Self {
        match err {
            phonenumber::ParseError::InvalidCountryCode => ParseError::InvalidCountryCode,
            phonenumber::ParseError::TooShortAfterIdd => ParseError::TooShortAfterIdd,
            phonenumber::ParseError::TooShortNsn => ParseError::TooShortNsn,
            phonenumber::ParseError::TooLong => ParseError::TooLongNsn,
            phonenumber::ParseError::NoNumber | phonenumber::ParseError::MalformedInteger(_) => {
                ParseError::NotANumber(input.to_owned())
            }
        }
    }
}
