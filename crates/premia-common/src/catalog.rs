//! Coverage Catalog
//!
//! Immutable mapping from coverage type id to [`CoverageType`], built once and
//! then only read. The standard catalog is a process-wide static; catalogs
//! built from configuration are validated on construction.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use rust_decimal_macros::dec;
use tracing::debug;

use crate::error::{CatalogError, CoverageError, Result};
use crate::types::coverage::CoverageType;

static STANDARD_CATALOG: LazyLock<Arc<CoverageCatalog>> = LazyLock::new(|| {
    let entries = CoverageCatalog::standard_types()
        .into_iter()
        .map(|coverage| (coverage.id.clone(), coverage))
        .collect();
    Arc::new(CoverageCatalog { entries })
});

/// Read-only coverage type lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageCatalog {
    entries: BTreeMap<String, CoverageType>,
}

impl CoverageCatalog {
    /// Shared handle to the standard catalog
    pub fn standard() -> Arc<CoverageCatalog> {
        Arc::clone(&STANDARD_CATALOG)
    }

    /// Build a catalog from explicit entries
    ///
    /// Fails on an empty list, duplicate ids, non-positive rates, bounds
    /// that are not positive with `min < max`, or a worst-case premium that
    /// does not fit in a `Decimal`.
    pub fn from_types(
        types: impl IntoIterator<Item = CoverageType>,
    ) -> std::result::Result<Self, CatalogError> {
        let mut entries = BTreeMap::new();
        for coverage in types {
            coverage.validate()?;
            if entries.contains_key(&coverage.id) {
                return Err(CatalogError::DuplicateId(coverage.id));
            }
            entries.insert(coverage.id.clone(), coverage);
        }

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        debug!(coverage_types = entries.len(), "Built coverage catalog");
        Ok(Self { entries })
    }

    /// Look up a coverage type; `None` when the id is not in the catalog
    pub fn lookup(&self, type_id: &str) -> Option<&CoverageType> {
        self.entries.get(type_id)
    }

    /// Look up a coverage type, failing with `UnknownCoverageType`
    pub fn resolve(&self, type_id: &str) -> Result<&CoverageType> {
        self.lookup(type_id)
            .ok_or_else(|| CoverageError::unknown_type(type_id))
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.entries.contains_key(type_id)
    }

    /// Coverage types ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &CoverageType> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of the standard catalog
    pub fn standard_types() -> Vec<CoverageType> {
        vec![
            CoverageType::new("life", "Life Insurance", dec!(25), dec!(50000), dec!(5000000))
                .with_description("Financial protection for beneficiaries"),
            CoverageType::new("health", "Health Insurance", dec!(15), dec!(10000), dec!(1000000))
                .with_description("Medical expenses and hospitalization"),
            CoverageType::new("property", "Property Insurance", dec!(10), dec!(100000), dec!(5000000))
                .with_description("Home and property damage"),
            CoverageType::new("auto", "Auto Insurance", dec!(8), dec!(10000), dec!(500000))
                .with_description("Vehicle damage and liability"),
            CoverageType::new("disability", "Disability Insurance", dec!(20), dec!(25000), dec!(1000000))
                .with_description("Income replacement when unable to work"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = CoverageCatalog::standard();
        assert_eq!(catalog.len(), 5);

        let life = catalog.lookup("life").unwrap();
        assert_eq!(life.base_rate, dec!(25));
        assert_eq!(life.min_coverage, dec!(50000));

        for coverage in catalog.iter() {
            assert!(coverage.validate().is_ok(), "{} is invalid", coverage.id);
        }
    }

    #[test]
    fn test_unknown_type_is_not_defaulted() {
        let catalog = CoverageCatalog::standard();
        assert!(catalog.lookup("pet").is_none());
        assert_eq!(
            catalog.resolve("pet"),
            Err(CoverageError::unknown_type("pet"))
        );
        // Ids are case sensitive
        assert!(!catalog.contains("Life"));
    }

    #[test]
    fn test_standard_catalog_is_shared() {
        let a = CoverageCatalog::standard();
        let b = CoverageCatalog::standard();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_from_types_rejects_duplicates() {
        let types = vec![
            CoverageType::new("pet", "Pet", dec!(3), dec!(1000), dec!(20000)),
            CoverageType::new("pet", "Pet again", dec!(4), dec!(1000), dec!(20000)),
        ];
        assert_eq!(
            CoverageCatalog::from_types(types),
            Err(CatalogError::DuplicateId("pet".to_string()))
        );
    }

    #[test]
    fn test_from_types_rejects_empty_and_invalid() {
        assert_eq!(
            CoverageCatalog::from_types(Vec::new()),
            Err(CatalogError::Empty)
        );

        let bad = CoverageType::new("pet", "Pet", dec!(-1), dec!(1000), dec!(20000));
        assert!(matches!(
            CoverageCatalog::from_types(vec![bad]),
            Err(CatalogError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_from_types_rejects_entry_whose_premium_overflows() {
        let huge = CoverageType::new(
            "x",
            "X",
            dec!(100000000000000000000),
            dec!(1),
            dec!(100000000000000000000),
        );
        assert!(matches!(
            CoverageCatalog::from_types(vec![huge]),
            Err(CatalogError::PremiumOverflow { .. })
        ));
    }

    #[test]
    fn test_from_types_custom_catalog() {
        let catalog = CoverageCatalog::from_types(vec![CoverageType::new(
            "travel",
            "Travel",
            dec!(5),
            dec!(1000),
            dec!(100000),
        )])
        .unwrap();
        assert!(catalog.contains("travel"));
        assert!(!catalog.contains("life"));
    }
}
