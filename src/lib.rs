mod interfaces;
mod carrierclassifier;
mod backend;
mod carrier;
mod finder;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use carrierclassifier::{
    carrierclassifier::CarrierClassifier, errors, CarrierLabel, ClassifierConfig, NumberFormat,
    NumberInput, NumberType, ParsedNumber, CARRIER_CLASSIFIER,
};
pub use interfaces::{CarrierMapper, NumberBackend};
pub use backend::LibPhoneNumberBackend;
pub use carrier::{PrefixCarrierMapper, PrefixTable};
pub use finder::{lookup_carrier, CarrierFinder, CarrierLookupResponse};
