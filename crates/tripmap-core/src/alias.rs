// crates/tripmap-core/src/alias.rs

//! Alias table mapping boundary-dataset names to country codes.
//!
//! Boundary datasets disagree on spelling: the same jurisdiction appears as
//! "USA", "United States of America", or under an official long form
//! depending on the source. Each row maps one external name string to one
//! canonical ISO2-style code. Many aliases per code is expected; one alias
//! pointing at two codes is a data-integrity violation and is rejected when
//! the table is built.

use crate::error::{MapError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in alias rows covering the common boundary-dataset spellings.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    // North America
    ("United States of America", "US"),
    ("USA", "US"),
    ("Canada", "CA"),
    ("Mexico", "MX"),
    ("Guatemala", "GT"),
    ("El Salvador", "SV"),
    ("Honduras", "HN"),
    ("Nicaragua", "NI"),
    ("Costa Rica", "CR"),
    ("Panama", "PA"),
    // South America
    ("Brazil", "BR"),
    ("Argentina", "AR"),
    ("Chile", "CL"),
    ("Peru", "PE"),
    ("Colombia", "CO"),
    ("Venezuela", "VE"),
    ("Ecuador", "EC"),
    ("Bolivia", "BO"),
    ("Paraguay", "PY"),
    ("Uruguay", "UY"),
    ("Guyana", "GY"),
    ("Suriname", "SR"),
    ("French Guiana", "GF"),
    // Europe
    ("United Kingdom", "GB"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("Italy", "IT"),
    ("Spain", "ES"),
    ("Portugal", "PT"),
    ("Netherlands", "NL"),
    ("Belgium", "BE"),
    ("Switzerland", "CH"),
    ("Austria", "AT"),
    ("Norway", "NO"),
    ("Sweden", "SE"),
    ("Denmark", "DK"),
    ("Finland", "FI"),
    ("Iceland", "IS"),
    ("Ireland", "IE"),
    ("Poland", "PL"),
    ("Czech Republic", "CZ"),
    ("Slovakia", "SK"),
    ("Hungary", "HU"),
    ("Romania", "RO"),
    ("Bulgaria", "BG"),
    ("Croatia", "HR"),
    ("Slovenia", "SI"),
    ("Serbia", "RS"),
    ("Republic of Serbia", "RS"),
    ("Bosnia and Herzegovina", "BA"),
    ("Montenegro", "ME"),
    ("Albania", "AL"),
    ("Macedonia", "MK"),
    ("Greece", "GR"),
    ("Turkey", "TR"),
    ("Cyprus", "CY"),
    ("Malta", "MT"),
    ("Estonia", "EE"),
    ("Latvia", "LV"),
    ("Lithuania", "LT"),
    ("Belarus", "BY"),
    ("Ukraine", "UA"),
    ("Moldova", "MD"),
    ("Monaco", "MC"),
    ("Luxembourg", "LU"),
    ("Liechtenstein", "LI"),
    ("San Marino", "SM"),
    ("Vatican", "VA"),
    ("Andorra", "AD"),
    // Asia
    ("Russia", "RU"),
    ("China", "CN"),
    ("India", "IN"),
    ("Japan", "JP"),
    ("South Korea", "KR"),
    ("North Korea", "KP"),
    ("Thailand", "TH"),
    ("Vietnam", "VN"),
    ("Cambodia", "KH"),
    ("Laos", "LA"),
    ("Myanmar", "MM"),
    ("Malaysia", "MY"),
    ("Singapore", "SG"),
    ("Indonesia", "ID"),
    ("Philippines", "PH"),
    ("Brunei", "BN"),
    ("East Timor", "TL"),
    ("Mongolia", "MN"),
    ("Kazakhstan", "KZ"),
    ("Uzbekistan", "UZ"),
    ("Turkmenistan", "TM"),
    ("Tajikistan", "TJ"),
    ("Kyrgyzstan", "KG"),
    ("Afghanistan", "AF"),
    ("Pakistan", "PK"),
    ("Bangladesh", "BD"),
    ("Sri Lanka", "LK"),
    ("Maldives", "MV"),
    ("Nepal", "NP"),
    ("Bhutan", "BT"),
    ("Taiwan", "TW"),
    ("Hong Kong", "HK"),
    ("Macau", "MO"),
    // Middle East
    ("Iran", "IR"),
    ("Iraq", "IQ"),
    ("Syria", "SY"),
    ("Lebanon", "LB"),
    ("Jordan", "JO"),
    ("Israel", "IL"),
    ("Palestine", "PS"),
    ("West Bank", "PS"),
    ("Saudi Arabia", "SA"),
    ("Yemen", "YE"),
    ("Oman", "OM"),
    ("United Arab Emirates", "AE"),
    ("Qatar", "QA"),
    ("Bahrain", "BH"),
    ("Kuwait", "KW"),
    ("Georgia", "GE"),
    ("Armenia", "AM"),
    ("Azerbaijan", "AZ"),
    // Africa
    ("Egypt", "EG"),
    ("Libya", "LY"),
    ("Tunisia", "TN"),
    ("Algeria", "DZ"),
    ("Morocco", "MA"),
    ("Western Sahara", "EH"),
    ("Sudan", "SD"),
    ("South Sudan", "SS"),
    ("Ethiopia", "ET"),
    ("Eritrea", "ER"),
    ("Djibouti", "DJ"),
    ("Somalia", "SO"),
    ("Somaliland", "SO"),
    ("Kenya", "KE"),
    ("Uganda", "UG"),
    ("Tanzania", "TZ"),
    ("United Republic of Tanzania", "TZ"),
    ("Rwanda", "RW"),
    ("Burundi", "BI"),
    ("Democratic Republic of the Congo", "CD"),
    ("Republic of the Congo", "CG"),
    ("Central African Republic", "CF"),
    ("Chad", "TD"),
    ("Cameroon", "CM"),
    ("Nigeria", "NG"),
    ("Niger", "NE"),
    ("Mali", "ML"),
    ("Burkina Faso", "BF"),
    ("Ivory Coast", "CI"),
    ("Ghana", "GH"),
    ("Togo", "TG"),
    ("Benin", "BJ"),
    ("Senegal", "SN"),
    ("Gambia", "GM"),
    ("Guinea-Bissau", "GW"),
    ("Guinea", "GN"),
    ("Sierra Leone", "SL"),
    ("Liberia", "LR"),
    ("Mauritania", "MR"),
    ("Cape Verde", "CV"),
    ("Madagascar", "MG"),
    ("Mauritius", "MU"),
    ("Seychelles", "SC"),
    ("Comoros", "KM"),
    ("Mayotte", "YT"),
    ("Réunion", "RE"),
    ("South Africa", "ZA"),
    ("Lesotho", "LS"),
    ("Swaziland", "SZ"),
    ("Botswana", "BW"),
    ("Namibia", "NA"),
    ("Angola", "AO"),
    ("Zambia", "ZM"),
    ("Zimbabwe", "ZW"),
    ("Malawi", "MW"),
    ("Mozambique", "MZ"),
    ("Gabon", "GA"),
    ("Equatorial Guinea", "GQ"),
    ("São Tomé and Príncipe", "ST"),
    // Oceania
    ("Australia", "AU"),
    ("New Zealand", "NZ"),
    ("Fiji", "FJ"),
    ("Papua New Guinea", "PG"),
    ("Solomon Islands", "SB"),
    ("Vanuatu", "VU"),
    ("New Caledonia", "NC"),
    ("French Polynesia", "PF"),
    ("Samoa", "WS"),
    ("Tonga", "TO"),
    ("Kiribati", "KI"),
    ("Tuvalu", "TV"),
    ("Nauru", "NR"),
    ("Palau", "PW"),
    ("Marshall Islands", "MH"),
    ("Micronesia", "FM"),
    ("Cook Islands", "CK"),
    ("Niue", "NU"),
    // Caribbean
    ("Cuba", "CU"),
    ("Jamaica", "JM"),
    ("Haiti", "HT"),
    ("Dominican Republic", "DO"),
    ("Puerto Rico", "PR"),
    ("Trinidad and Tobago", "TT"),
    ("Barbados", "BB"),
    ("Saint Lucia", "LC"),
    ("Grenada", "GD"),
    ("Saint Vincent and the Grenadines", "VC"),
    ("Antigua and Barbuda", "AG"),
    ("Dominica", "DM"),
    ("Saint Kitts and Nevis", "KN"),
    ("Bahamas", "BS"),
    ("Belize", "BZ"),
    ("Antarctica", "AQ"),
];

static BUILTIN: Lazy<AliasTable> = Lazy::new(|| {
    AliasTable::new(BUILTIN_ALIASES).expect("builtin alias table is conflict-free")
});

/// Read-only alias lookup table, validated at construction.
#[derive(Debug, Clone)]
pub struct AliasTable {
    map: HashMap<String, String>,
}

impl AliasTable {
    /// Builds a table from alias rows, rejecting any alias that maps to
    /// more than one code.
    pub fn new<'a, I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a (&'a str, &'a str)>,
    {
        let mut map = HashMap::new();
        for (alias, code) in rows {
            if let Some(existing) = map.insert(alias.to_string(), code.to_string()) {
                if existing != *code {
                    return Err(MapError::AliasConflict {
                        alias: alias.to_string(),
                        first: existing,
                        second: code.to_string(),
                    });
                }
            }
        }
        Ok(Self { map })
    }

    /// The process-wide table built from [`BUILTIN_ALIASES`].
    pub fn builtin() -> &'static AliasTable {
        &BUILTIN
    }

    /// Resolves an external boundary name to its country code, if aliased.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name.trim()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All alias strings registered for a code, sorted for stable output.
    pub fn aliases_for(&self, code: &str) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .map
            .iter()
            .filter(|(_, c)| c.eq_ignore_ascii_case(code))
            .map(|(a, _)| a.as_str())
            .collect();
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_builds_and_is_unambiguous() {
        let table = AliasTable::builtin();
        assert!(table.len() > 200);
        // Spot checks against known boundary spellings.
        assert_eq!(table.get("United States of America"), Some("US"));
        assert_eq!(table.get("USA"), Some("US"));
        assert_eq!(table.get("United Republic of Tanzania"), Some("TZ"));
        assert_eq!(table.get("Republic of Serbia"), Some("RS"));
        assert_eq!(table.get("Atlantis"), None);
    }

    #[test]
    fn many_aliases_to_one_code_is_valid() {
        let table = AliasTable::new(&[("USA", "US"), ("United States", "US")]).unwrap();
        assert_eq!(table.aliases_for("US"), vec!["USA", "United States"]);
    }

    #[test]
    fn conflicting_alias_is_rejected() {
        let err = AliasTable::new(&[("Kongo", "CD"), ("Kongo", "CG")]).unwrap_err();
        match err {
            MapError::AliasConflict { alias, first, second } => {
                assert_eq!(alias, "Kongo");
                assert_eq!(first, "CD");
                assert_eq!(second, "CG");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_identical_rows_are_tolerated() {
        let table = AliasTable::new(&[("USA", "US"), ("USA", "US")]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_trims_whitespace() {
        let table = AliasTable::builtin();
        assert_eq!(table.get("  Canada "), Some("CA"));
    }
}
