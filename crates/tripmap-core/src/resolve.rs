// crates/tripmap-core/src/resolve.rs

//! Resolution of external boundary names to country records.

use crate::alias::AliasTable;
use crate::model::Country;

/// Read-only view over the current country list plus an alias table.
///
/// Resolution is a pure function of `(name, alias table, country list)`:
/// no mutation, no side effects. An unresolvable name is not an error,
/// merely an unmapped boundary.
pub struct Registry<'a> {
    countries: &'a [Country],
    aliases: &'a AliasTable,
}

impl<'a> Registry<'a> {
    pub fn new(countries: &'a [Country], aliases: &'a AliasTable) -> Self {
        Self { countries, aliases }
    }

    /// Registry backed by the built-in alias table.
    pub fn with_builtin_aliases(countries: &'a [Country]) -> Self {
        Self::new(countries, AliasTable::builtin())
    }

    pub fn countries(&self) -> &'a [Country] {
        self.countries
    }

    /// Find a country by code, case-insensitive (e.g. "DE", "us").
    /// Linear scan of countries is fast (N < 300).
    pub fn find_by_code(&self, code: &str) -> Option<&'a Country> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Resolves a boundary-dataset name to a country, first match wins:
    ///
    /// 1. alias table lookup → code → country with that code;
    /// 2. direct equality against a country's display name;
    /// 3. neither → `None` (unmapped boundary).
    pub fn resolve(&self, boundary_name: &str) -> Option<&'a Country> {
        let name = boundary_name.trim();

        if let Some(code) = self.aliases.get(name) {
            if let Some(country) = self.find_by_code(code) {
                return Some(country);
            }
        }

        self.countries.iter().find(|c| c.name == name)
    }
}
