use super::helper_constants::{DEFAULT_LANGUAGE_CODE, DEFAULT_REGION_CODE};

/// Settings of a [`CarrierClassifier`](super::CarrierClassifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Region used to parse numbers written without a country calling code.
    pub default_region: String,
    /// Language of carrier names returned by the carrier mapper.
    pub default_language: String,
    /// Report Yoomee instead of CAMTEL for `2429` numbers that the carrier
    /// data doesn't know. Off by default.
    pub distinguish_yoomee: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_region: DEFAULT_REGION_CODE.to_owned(),
            default_language: DEFAULT_LANGUAGE_CODE.to_owned(),
            distinguish_yoomee: false,
        }
    }
}

impl ClassifierConfig {
    pub fn with_default_region(mut self, region_code: impl Into<String>) -> Self {
        self.default_region = region_code.into();
        self
    }

    pub fn with_default_language(mut self, language_code: impl Into<String>) -> Self {
        self.default_language = language_code.into();
        self
    }

    pub fn with_distinguish_yoomee(mut self, distinguish_yoomee: bool) -> Self {
        self.distinguish_yoomee = distinguish_yoomee;
        self
    }
}
