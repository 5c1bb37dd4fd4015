use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::core::record::FastaRecord;
use crate::core::types::{ConventionMatch, DatabaseType};
use crate::matching::classifier::HeaderClassifier;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid FASTA headers detected. Exit requested by user. (record {index}: {header})")]
    InvalidHeader { index: usize, header: String },
}

/// A FASTA database split into well-formed and malformed entries
///
/// Built once from the records of a file; read-only afterwards.
#[derive(Debug, Default)]
pub struct FastaCatalog {
    /// All records, in file order
    records: Vec<FastaRecord>,

    /// Indices of records whose header matched a known convention
    good: Vec<usize>,

    /// Indices of records whose header matched no convention
    bad: Vec<usize>,

    /// Database type -> number of good records with that type
    database_counts: BTreeMap<DatabaseType, usize>,
}

impl FastaCatalog {
    /// Classify and partition records with the built-in conventions
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidHeader` for the first header that matches
    /// no convention when `crash_on_invalid` is set. Records after it are not
    /// examined.
    pub fn build(
        records: Vec<FastaRecord>,
        crash_on_invalid: bool,
    ) -> Result<Self, CatalogError> {
        Self::build_with(records, &HeaderClassifier::new(), crash_on_invalid)
    }

    /// Classify and partition records with a given classifier
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidHeader` for the first header that matches
    /// no convention when `crash_on_invalid` is set.
    pub fn build_with(
        records: Vec<FastaRecord>,
        classifier: &HeaderClassifier,
        crash_on_invalid: bool,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for record in records {
            let index = catalog.records.len();
            match classifier.classify(&record.header) {
                ConventionMatch::Matched(database) => {
                    catalog.good.push(index);
                    *catalog.database_counts.entry(database).or_default() += 1;
                }
                ConventionMatch::NoMatch => {
                    if crash_on_invalid {
                        return Err(CatalogError::InvalidHeader {
                            index,
                            header: record.header_text().to_string(),
                        });
                    }
                    debug!("Malformed FASTA header: {}", record.header_text());
                    catalog.bad.push(index);
                }
            }
            catalog.records.push(record);
        }

        debug!(
            records = catalog.len(),
            good = catalog.good.len(),
            bad = catalog.bad.len(),
            "Classified FASTA headers"
        );
        Ok(catalog)
    }

    /// All records, in file order
    #[must_use]
    pub fn records(&self) -> &[FastaRecord] {
        &self.records
    }

    /// Records with a recognised header, in file order
    pub fn good(&self) -> impl ExactSizeIterator<Item = &FastaRecord> + '_ {
        self.good.iter().map(|&i| &self.records[i])
    }

    /// Records with an unrecognised header, in file order
    pub fn bad(&self) -> impl ExactSizeIterator<Item = &FastaRecord> + '_ {
        self.bad.iter().map(|&i| &self.records[i])
    }

    #[must_use]
    pub fn good_count(&self) -> usize {
        self.good.len()
    }

    #[must_use]
    pub fn bad_count(&self) -> usize {
        self.bad.len()
    }

    /// Number of good records per database type
    #[must_use]
    pub fn database_counts(&self) -> &BTreeMap<DatabaseType, usize> {
        &self.database_counts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
