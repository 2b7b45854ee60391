use super::types::RecordLines;
use crate::error::TemplateError;

/// Role prefix lengths fixed by the external line-tagging convention
/// (`in : `, `uni:`, `out:`).
pub const INPUT_PREFIX_LEN: usize = 5;
pub const UNIVERSAL_PREFIX_LEN: usize = 4;
pub const OUTPUT_PREFIX_LEN: usize = 4;

/// Partition the non-empty trimmed input lines into records of three role
/// lines each, stripping each line's role prefix.
///
/// A line count that is not a multiple of 3 means a truncated record and
/// aborts the run. A line shorter than its role prefix is treated the same
/// way rather than silently yielding an empty remainder.
pub fn group_records(lines: &[&str]) -> Result<Vec<RecordLines>, TemplateError> {
    if lines.len() % 3 != 0 {
        return Err(TemplateError::UnevenRecords { count: lines.len() });
    }

    let mut records = Vec::with_capacity(lines.len() / 3);

    for (chunk_idx, chunk) in lines.chunks_exact(3).enumerate() {
        let base = chunk_idx * 3;
        records.push(RecordLines {
            input: strip_prefix(chunk[0], INPUT_PREFIX_LEN, base)?,
            universal: strip_prefix(chunk[1], UNIVERSAL_PREFIX_LEN, base + 1)?,
            output: strip_prefix(chunk[2], OUTPUT_PREFIX_LEN, base + 2)?,
        });
    }

    Ok(records)
}

fn strip_prefix(line: &str, prefix: usize, index: usize) -> Result<String, TemplateError> {
    match line.get(prefix..) {
        Some(rest) => Ok(rest.trim().to_string()),
        None => Err(TemplateError::ShortLine {
            index,
            prefix,
            text: line.to_string(),
        }),
    }
}
