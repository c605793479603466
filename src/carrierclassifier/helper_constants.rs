/// Region assumed when a number is written without its country calling code.
pub const DEFAULT_REGION_CODE: &str = "CM";
/// Language of the carrier names returned by default.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

pub const PLUS_SIGN: &str = "+";

pub const EXTENSION_SEPARATOR: &str = " ext. ";

// CAMTEL numbers look like this:
//      222 XX XX XX (fixed line)
//      233 XX XX XX (fixed line)
//      242 XX XX XX (CDMA)
//      243 XX XX XX (CDMA)
//      620 XX XX XX (mobile)
// See https://www.cirt.cm/en/node/17?language=en
pub const CAMTEL_NUMBER_PATTERN: &str = r"(?:222|233|242|243|620)\d{6}";

// 242, 243 and 620 are the mobile range of CAMTEL numbers.
pub const MOBILE_CAMTEL_NUMBER_PATTERN: &str = r"(?:242|243|620)\d{6}";

// Yoomee numbers: 242 9X XX XX
pub const YOOMEE_NUMBER_PATTERN: &str = r"2429\d{5}";

/// How many trailing digits of an example number are replaced by random
/// digits to make it unique.
pub const UNIQUE_SUFFIX_LENGTH: usize = 4;
