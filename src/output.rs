//! Output formatting for txregions results.
//!
//! The legacy format is a parenthesised list of `key=>"value"` blocks read by
//! the downstream report scripts, so its whitespace and punctuation are kept
//! byte for byte (including the missing comma after the `region` block).

use std::io::Write;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::types::MatchRecord;

/// TSV column names, in output order.
pub const TSV_HEADER: &str = "refseq\tchrom\tstart\tend\texon_nr";

/// Format a single record as a legacy block, trailing newline included.
pub fn format_legacy_record(record: &MatchRecord) -> String {
    let mut block = String::new();
    block.push_str("\t{\n");
    block.push_str(&format!("\trefseq=>\"{}\",\n", record.transcript));
    block.push_str("\tregion=>{\n");
    block.push_str(&format!("\t\t\tchrom=>\"{}\",\n", record.chromosome));
    block.push_str(&format!("\t\t\tstart=>\"{}\",\n", record.exon_start));
    block.push_str(&format!("\t\t\tend=>\"{}\",\n", record.exon_end));
    block.push_str("\t\t}\n");
    block.push_str(&format!("\texon_nr=>\"{}\",\n", record.exon_number));
    block.push_str("\t},\n");
    block
}

/// Format a single record as a TSV row (no newline).
pub fn format_tsv_line(record: &MatchRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        record.transcript,
        record.chromosome,
        record.exon_start,
        record.exon_end,
        record.exon_number
    )
}

/// Write all records in the legacy format.
pub fn write_legacy<W: Write>(writer: &mut W, records: &[MatchRecord]) -> Result<()> {
    writeln!(writer, "(")?;
    for record in records {
        writer.write_all(format_legacy_record(record).as_bytes())?;
    }
    writeln!(writer, ")")?;
    Ok(())
}

/// Write all records as a TSV table with header.
pub fn write_tsv<W: Write>(writer: &mut W, records: &[MatchRecord]) -> Result<()> {
    writeln!(writer, "{}", TSV_HEADER)?;
    for record in records {
        writeln!(writer, "{}", format_tsv_line(record))?;
    }
    Ok(())
}

/// Write records in the requested format and flush the writer.
pub fn write_matches<W: Write>(
    writer: &mut W,
    records: &[MatchRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Legacy => write_legacy(writer, records)?,
        OutputFormat::Tsv => write_tsv(writer, records)?,
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(exon_number: &str) -> MatchRecord {
        MatchRecord {
            transcript: "NM_000001".to_string(),
            chromosome: "chr1".to_string(),
            exon_start: "100".to_string(),
            exon_end: "200".to_string(),
            exon_number: exon_number.to_string(),
        }
    }

    #[test]
    fn test_format_legacy_record() {
        let block = format_legacy_record(&record("1"));
        assert_eq!(
            block,
            "\t{\n\trefseq=>\"NM_000001\",\n\tregion=>{\n\t\t\tchrom=>\"chr1\",\n\t\t\tstart=>\"100\",\n\t\t\tend=>\"200\",\n\t\t}\n\texon_nr=>\"1\",\n\t},\n"
        );
    }

    #[test]
    fn test_write_legacy_empty() {
        let mut output = Vec::new();
        write_legacy(&mut output, &[]).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "(\n)\n");
    }

    #[test]
    fn test_write_legacy_keeps_order() {
        let mut output = Vec::new();
        write_legacy(&mut output, &[record("2"), record("1")]).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("(\n\t{\n"));
        assert!(text.ends_with("\t},\n)\n"));
        let second = text.find("exon_nr=>\"2\"").unwrap();
        let first = text.find("exon_nr=>\"1\"").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_write_tsv() {
        let mut output = Vec::new();
        write_tsv(&mut output, &[record("3")]).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "refseq\tchrom\tstart\tend\texon_nr\nNM_000001\tchr1\t100\t200\t3\n"
        );
    }

    #[test]
    fn test_write_matches_dispatch() {
        let mut legacy = Vec::new();
        write_matches(&mut legacy, &[record("1")], OutputFormat::Legacy).unwrap();
        assert!(legacy.starts_with(b"(\n"));

        let mut tsv = Vec::new();
        write_matches(&mut tsv, &[record("1")], OutputFormat::Tsv).unwrap();
        assert!(tsv.starts_with(TSV_HEADER.as_bytes()));
    }
}
