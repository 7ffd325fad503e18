//! CSV catalogue of tenancy terms.
//!
//! The catalogue is reference data: one row per leasable unit with its
//! floor area, the per-sqft rate for each lease year, and the rent-free
//! renovation months granted at signing.
//!
//! CSV columns: `unit, floor_area_sqft, rate_year1, rate_year2, rate_year3,
//! renovation_months`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use pnl_core::TenancyTerm;

/// Errors that can occur when loading a term catalogue.
#[derive(Debug, Error)]
pub enum TermCatalogError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot read catalogue '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for TermCatalogError {
    fn from(err: csv::Error) -> Self {
        TermCatalogError::CsvParse(err.to_string())
    }
}

/// A single catalogue row.
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct TermRecord {
    unit: String,
    floor_area_sqft: Decimal,
    rate_year1: Decimal,
    rate_year2: Decimal,
    rate_year3: Decimal,
    renovation_months: u32,
}

impl From<TermRecord> for TenancyTerm {
    fn from(record: TermRecord) -> Self {
        TenancyTerm {
            unit: record.unit,
            floor_area_sqft: record.floor_area_sqft,
            rate_year1: record.rate_year1,
            rate_year2: record.rate_year2,
            rate_year3: record.rate_year3,
            renovation_months: record.renovation_months,
        }
    }
}

/// An in-memory tenancy-term catalogue.
#[derive(Debug, Clone, Default)]
pub struct TermCatalog {
    terms: Vec<TenancyTerm>,
}

impl TermCatalog {
    /// Parses a catalogue from any CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Self, TermCatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut terms = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TermRecord = result?;
            terms.push(record.into());
        }

        Ok(Self { terms })
    }

    /// Loads a catalogue from a CSV file.
    pub fn load(path: &Path) -> Result<Self, TermCatalogError> {
        let file = File::open(path).map_err(|source| TermCatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(file)
    }

    pub fn terms(&self) -> &[TenancyTerm] {
        &self.terms
    }

    /// Looks a unit up by its label.
    pub fn find(
        &self,
        unit: &str,
    ) -> Option<&TenancyTerm> {
        self.terms.iter().find(|term| term.unit == unit)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use pnl_core::LeaseYear;

    const TEST_CSV: &str = "\
unit,floor_area_sqft,rate_year1,rate_year2,rate_year3,renovation_months
LG 15 + 14,666,8.50,9,9.5,3
G 02,420,12,12.5,13,2
";

    #[test]
    fn parse_reads_every_row() {
        let catalog = TermCatalog::parse(TEST_CSV.as_bytes()).unwrap();

        assert_eq!(catalog.terms().len(), 2);
    }

    #[test]
    fn parsed_terms_carry_their_rates() {
        let catalog = TermCatalog::parse(TEST_CSV.as_bytes()).unwrap();

        let term = catalog.find("LG 15 + 14").unwrap();

        assert_eq!(term.floor_area_sqft, dec!(666));
        assert_eq!(term.rate_for(LeaseYear::Year1), dec!(8.50));
        assert_eq!(term.rent_for(LeaseYear::Year2), dec!(5994));
        assert_eq!(term.renovation_months, 3);
    }

    #[test]
    fn find_returns_none_for_an_unknown_unit() {
        let catalog = TermCatalog::parse(TEST_CSV.as_bytes()).unwrap();

        assert!(catalog.find("LG 99").is_none());
    }

    #[test]
    fn parse_rejects_malformed_rows() {
        let bad = "\
unit,floor_area_sqft,rate_year1,rate_year2,rate_year3,renovation_months
LG 15 + 14,not-a-number,8.50,9,9.5,3
";

        let err = TermCatalog::parse(bad.as_bytes()).unwrap_err();

        assert!(matches!(err, TermCatalogError::CsvParse(_)));
    }
}
