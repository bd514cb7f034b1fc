//! Valuation result files.

use std::io::{Read, Write};

use bondval_core::ValuationResult;

use crate::error::FileResult;

/// Header of a result file.
pub const RESULT_COLUMNS: [&str; 4] = ["BondId", "Type", "PresentValue", "Notes"];

/// Writes results as a delimited file, one row per result in order.
///
/// The header is written even when there are no results.
pub fn write_results<W: Write>(
    output: W,
    results: &[ValuationResult],
    delimiter: u8,
) -> FileResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(output);

    writer.write_record(RESULT_COLUMNS)?;
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a result file written by [`write_results`].
pub fn read_results<R: Read>(input: R, delimiter: u8) -> FileResult<Vec<ValuationResult>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut results = Vec::new();
    for record in reader.deserialize() {
        results.push(record?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondval_core::InstrumentType;
    use rust_decimal_macros::dec;

    fn sample() -> Vec<ValuationResult> {
        vec![
            ValuationResult::new("NL0011", InstrumentType::Standard, dec!(1106.6669)),
            ValuationResult::new("UKTI28", InstrumentType::InflationLinked, dec!(4689.765))
                .with_notes("Approximate value - actual value depends on realized inflation rates"),
            ValuationResult::new("US0Z35", InstrumentType::ZeroCoupon, dec!(1480.24428491834)),
        ]
    }

    #[test]
    fn test_write_layout() {
        let mut buf = Vec::new();
        write_results(&mut buf, &sample(), b';').unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "BondId;Type;PresentValue;Notes");
        assert_eq!(lines[1], "NL0011;Bond;1106.6669;");
        assert_eq!(
            lines[2],
            "UKTI28;InflationLinked;4689.765;Approximate value - actual value depends on realized inflation rates"
        );
        assert_eq!(lines[3], "US0Z35;ZeroCoupon;1480.24428491834;");
    }

    #[test]
    fn test_header_written_for_empty_results() {
        let mut buf = Vec::new();
        write_results(&mut buf, &[], b';').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "BondId;Type;PresentValue;Notes\n");
    }

    #[test]
    fn test_read_back() {
        let mut buf = Vec::new();
        write_results(&mut buf, &sample(), b';').unwrap();
        let parsed = read_results(buf.as_slice(), b';').unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_read_rejects_unknown_type() {
        let input = "BondId;Type;PresentValue;Notes\nX;Perpetual;1;\n";
        assert!(read_results(input.as_bytes(), b';').is_err());
    }
}
