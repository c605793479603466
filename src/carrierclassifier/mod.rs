pub(crate) mod helper_constants;
mod helper_types;
mod config;
pub mod errors;
pub mod enums;
pub mod carrierclassifier;

use std::sync::LazyLock;

pub use config::ClassifierConfig;
pub use enums::{CarrierLabel, NumberFormat, NumberType};
pub use helper_types::{NumberInput, ParsedNumber};
use crate::carrierclassifier::carrierclassifier::CarrierClassifier;

pub static CARRIER_CLASSIFIER: LazyLock<CarrierClassifier> = LazyLock::new(|| {
    CarrierClassifier::new()
});
