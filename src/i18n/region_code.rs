pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    /// Cameroon, the region whose carriers are detected.
    pub fn cm() -> &'static str {
        return "CM";
    }

    pub fn fr() -> &'static str {
        return "FR";
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }
}
