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


use log::error;
use super::regex_util::RegexFullMatch;

use crate::{interfaces, regexp_cache::{InvalidRegexError, RegexCache}};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(8) }
    }

    fn match_number(
        &self, phone_number: &str,
        number_pattern: &str,
    ) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(number_pattern)?;
        Ok(regexp.full_match(phone_number))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self, number: &str,
        number_pattern: &str,
    ) -> bool {
        // An empty pattern never matches, not even an empty number.
        if number_pattern.is_empty() {
            return false;
        }
        match self.match_number(number, number_pattern) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", number_pattern, err);
                false
            }
        }
    }
}
