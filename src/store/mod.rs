//! The fixed prospect database: one record list per proposition.
//!
//! Pure lookup, no mutation. Record order is declaration order and never
//! changes between calls.

mod advanced;
mod basic;
mod premium;

use crate::record::{AdvancedRecord, BasicRecord, Mode, PremiumRecord, RecordSet};

/// Returns the record list for the given mode.
#[must_use]
pub fn records(mode: Mode) -> RecordSet {
    match mode {
        Mode::Basic => RecordSet::Basic(&basic::RECORDS),
        Mode::Advanced => RecordSet::Advanced(&advanced::RECORDS),
        Mode::Premium => RecordSet::Premium(&premium::RECORDS),
    }
}

#[must_use]
pub fn basic() -> &'static [BasicRecord] {
    &basic::RECORDS
}

#[must_use]
pub fn advanced() -> &'static [AdvancedRecord] {
    &advanced::RECORDS
}

#[must_use]
pub fn premium() -> &'static [PremiumRecord] {
    &premium::RECORDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CustomerRecord;

    #[test]
    fn test_twenty_records_per_mode() {
        for mode in Mode::ALL {
            assert_eq!(records(mode).len(), 20, "mode {mode}");
        }
    }

    #[test]
    fn test_same_companies_across_modes() {
        let names: Vec<&str> = basic().iter().map(|r| r.company_name).collect();
        let advanced_names: Vec<&str> = advanced().iter().map(|r| r.company_name).collect();
        let premium_names: Vec<&str> = premium().iter().map(|r| r.company_name).collect();
        assert_eq!(names, advanced_names);
        assert_eq!(names, premium_names);
        assert_eq!(names[0], "Global Bank Corp");
        assert_eq!(names[19], "Global Aid Foundation");
    }

    #[test]
    fn test_size_split() {
        let sme = basic().iter().filter(|r| r.company_size == "SME").count();
        let large = basic()
            .iter()
            .filter(|r| r.company_size == "Large Enterprise")
            .count();
        assert_eq!(sme, 4);
        assert_eq!(large, 16);
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let first = records(Mode::Premium).customers()[0].company_name().to_string();
        let second = records(Mode::Premium).customers()[0].company_name().to_string();
        assert_eq!(first, second);
    }
}
