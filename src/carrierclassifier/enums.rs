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

use strum::{EnumIter, IntoEnumIterator};

/// Defines the various standardized formats for representing phone numbers.
///
/// For example, the CAMTEL number 222 12 34 56 would be:
/// - **INTERNATIONAL**: `+237 2 22 12 34 56`
/// - **NATIONAL**: `2 22 12 34 56`
/// - **E164**: `+237222123456`
/// - **RFC3966**: `tel:+237-2-22-12-34-56`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// **E.164 format.**
    /// International format with no spaces or symbols, always starting
    /// with a `+` followed by the country code.
    E164,
    /// **International format.**
    /// Includes the country code and is grouped with spaces.
    International,
    /// **National format.**
    /// The format used for dialing within the number's own country.
    National,
    /// **RFC3966 format.**
    /// Starts with "tel:" and uses hyphens as separators.
    RFC3966,
}

/// Categorizes phone numbers based on their primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Used in regions where fixed-line and mobile numbers can't be told
    /// apart by looking at the number itself.
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    VoIP,
    PersonalNumber,
    Pager,
    UAN,
    VoiceMail,
    /// The number does not match any of the known patterns for its region.
    Unknown,
}

impl NumberType {
    /// Types for which carrier data is meaningful. Fixed-line numbers can be
    /// ported between operators, so carrier data never names them.
    pub fn can_have_carrier(self) -> bool {
        matches!(
            self,
            NumberType::Mobile | NumberType::FixedLineOrMobile | NumberType::Pager
        )
    }
}

/// Mobile network carriers operating in Cameroon.
///
/// Display values match the carrier names found in libphonenumber's
/// `carrier/en/237.txt`, so a label produced by the carrier data and one
/// produced by the local prefix rules compare equal.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierLabel {
    MtnCameroon,
    Orange,
    Nexttel,
    Camtel,
    /// Yoomee numbers are under CAMTEL. Reserved: never produced unless the
    /// classifier is explicitly configured to tell the brands apart.
    Yoomee,
}

impl CarrierLabel {
    /// Carrier name as displayed to users.
    pub fn as_str(self) -> &'static str {
        match self {
            CarrierLabel::MtnCameroon => "MTN Cameroon",
            CarrierLabel::Orange => "Orange",
            CarrierLabel::Nexttel => "NEXTTEL",
            CarrierLabel::Camtel => "CAMTEL",
            CarrierLabel::Yoomee => "Yoomee",
        }
    }

    /// Constant-style name of the label, e.g. `MTN_CAMEROON`.
    pub fn name(self) -> &'static str {
        match self {
            CarrierLabel::MtnCameroon => "MTN_CAMEROON",
            CarrierLabel::Orange => "ORANGE",
            CarrierLabel::Nexttel => "NEXTTEL",
            CarrierLabel::Camtel => "CAMTEL",
            CarrierLabel::Yoomee => "YOOMEE",
        }
    }

    /// The carrier a secondary brand belongs to.
    pub fn parent(self) -> Option<CarrierLabel> {
        match self {
            CarrierLabel::Yoomee => Some(CarrierLabel::Camtel),
            _ => None,
        }
    }

    pub fn is_reserved(self) -> bool {
        matches!(self, CarrierLabel::Yoomee)
    }

    /// Labels that take part in classification and membership checks.
    pub fn active() -> impl Iterator<Item = CarrierLabel> {
        CarrierLabel::iter().filter(|label| !label.is_reserved())
    }

    /// Returns true if `name` is the constant name of an active label.
    /// Comparison is case-insensitive unless `strict` is set.
    pub fn is_valid_name(name: &str, strict: bool) -> bool {
        Self::active().any(|label| {
            if strict {
                label.name() == name
            } else {
                label.name().eq_ignore_ascii_case(name)
            }
        })
    }

    /// Returns true if `value` is the display value of an active label.
    /// Comparison is exact when `strict` is set, case-insensitive otherwise.
    pub fn is_valid_value(value: &str, strict: bool) -> bool {
        Self::from_value(value, strict).is_some()
    }

    pub fn from_value(value: &str, strict: bool) -> Option<CarrierLabel> {
        Self::active().find(|label| {
            if strict {
                label.as_str() == value
            } else {
                label.as_str().eq_ignore_ascii_case(value)
            }
        })
    }
}

impl std::fmt::Display for CarrierLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CarrierLabel> for String {
    fn from(value: CarrierLabel) -> Self {
        value.as_str().to_owned()
    }
}
