//! Reading and writing FASTA records.
use super::FilterError;
use bio::io::fasta;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a FASTA file into a vector. The first record that cannot be
/// parsed, or that has no identifier, aborts the whole parse: skipping it
/// would corrupt the counts. Sequences are not checked.
pub fn parse_into_vec<P: AsRef<Path>>(file: P) -> Result<Vec<fasta::Record>, FilterError> {
    let file = file.as_ref();
    let reader = File::open(file).map_err(|why| FilterError::not_found(file, why))?;
    parse_from_reader(reader, file)
}

/// Same as `parse_into_vec`, from any reader. `origin` only names the
/// source in error messages.
pub fn parse_from_reader<R: std::io::Read>(
    reader: R,
    origin: &Path,
) -> Result<Vec<fasta::Record>, FilterError> {
    let mut reader = BufReader::new(reader);
    skip_leading_blanks(&mut reader)
        .map_err(|why| FilterError::malformed(origin, format!("record 1: {}", why)))?;
    fasta::Reader::new(reader)
        .records()
        .enumerate()
        .map(|(idx, record)| {
            let record = record.map_err(|why| {
                FilterError::malformed(origin, format!("record {}: {}", idx + 1, why))
            })?;
            if record.id().is_empty() {
                let reason = format!("record {}: empty identifier", idx + 1);
                return Err(FilterError::malformed(origin, reason));
            }
            Ok(record)
        })
        .collect()
}

// Blank lines before the first header are not records.
fn skip_leading_blanks<R: BufRead>(reader: &mut R) -> std::io::Result<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(());
        }
        let blanks = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let rest = buf.len() - blanks;
        reader.consume(blanks);
        if rest > 0 {
            return Ok(());
        }
    }
}

/// Write records in the given order to `wtr`.
pub fn write_records<W: std::io::Write>(wtr: W, records: &[fasta::Record]) -> std::io::Result<()> {
    let mut wtr = fasta::Writer::new(wtr);
    for record in records {
        wtr.write_record(record)?;
    }
    wtr.flush()
}

/// Write records to `file`. When writing fails midway, the partial file is
/// removed so that it can not be mistaken for a complete output.
pub fn write_to_file<P: AsRef<Path>>(file: P, records: &[fasta::Record]) -> Result<(), FilterError> {
    let file = file.as_ref();
    let wtr = File::create(file).map_err(|why| FilterError::write_failure(file, why))?;
    if let Err(why) = write_records(wtr, records) {
        warn!("Writing {} failed. Removing the partial output.", file.display());
        if let Err(rm) = std::fs::remove_file(file) {
            warn!("Could not remove {}:{}", file.display(), rm);
        }
        return Err(FilterError::write_failure(file, why));
    }
    debug!("Wrote {} records to {}", records.len(), file.display());
    Ok(())
}
