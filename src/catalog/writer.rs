//! Writes the partitions of a [`FastaCatalog`] back out as FASTA.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::catalog::store::FastaCatalog;
use crate::core::record::FastaRecord;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Number of records written to each output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub good: usize,
    pub bad: usize,
}

/// Write records verbatim, header then sequence block, returning how many were written
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_records<'a, W: Write>(
    writer: &mut W,
    records: impl IntoIterator<Item = &'a FastaRecord>,
) -> io::Result<usize> {
    let mut count = 0;
    for record in records {
        writer.write_all(record.header.as_bytes())?;
        writer.write_all(record.sequence.as_bytes())?;
        count += 1;
    }
    Ok(count)
}

fn create(path: &Path) -> Result<BufWriter<File>, WriteError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| WriteError::Create {
            path: path.to_path_buf(),
            source,
        })
}

fn write_partition<'a>(
    path: &Path,
    mut writer: BufWriter<File>,
    records: impl IntoIterator<Item = &'a FastaRecord>,
) -> Result<usize, WriteError> {
    let to_error = |source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };
    let count = write_records(&mut writer, records).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    Ok(count)
}

/// Write well-formed records to `good_path` and malformed ones to `bad_path`
///
/// Both files are created before anything is written. Each file handle is
/// closed when this returns, whether or not writing succeeded.
///
/// # Errors
///
/// Returns `WriteError::Create` if either file cannot be created and
/// `WriteError::Write` if writing or flushing fails.
pub fn write_partitions(
    catalog: &FastaCatalog,
    good_path: &Path,
    bad_path: &Path,
) -> Result<WriteSummary, WriteError> {
    let good_writer = create(good_path)?;
    let bad_writer = create(bad_path)?;

    let good = write_partition(good_path, good_writer, catalog.good())?;
    let bad = write_partition(bad_path, bad_writer, catalog.bad())?;

    debug!(
        good,
        bad,
        good_path = %good_path.display(),
        bad_path = %bad_path.display(),
        "Wrote filtered FASTA"
    );
    Ok(WriteSummary { good, bad })
}
