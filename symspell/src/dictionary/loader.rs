//! Parsing of whitespace separated dictionary lines.
use std::cmp::max;
use std::path::Path;

use itertools::Itertools;
use smol_str::SmolStr;

use crate::constants::SEPARATOR;
use crate::error::DictionaryError;

/// Parses a `term count` line. The line must hold exactly as many columns as
/// the larger of the two indices requires.
pub(crate) fn parse_entry(line: &str, term_index: usize, count_index: usize) -> Option<(&str, i64)> {
    let expected = max(term_index, count_index) + 1;
    let columns = line.split_whitespace().collect_vec();

    if columns.len() != expected {
        return None;
    }

    let count = columns[count_index].parse::<i64>().ok()?;
    Some((columns[term_index], count))
}

/// Parses a bigram line. The phrase spans `term_index` and the column after
/// it; trailing columns are ignored.
pub(crate) fn parse_bigram(
    line: &str,
    term_index: usize,
    count_index: usize,
) -> Option<(SmolStr, u64)> {
    let expected = max(term_index + 1, count_index) + 1;
    let columns = line.split_whitespace().collect_vec();

    if columns.len() < expected {
        return None;
    }

    let count = columns[count_index].parse::<u64>().ok()?;
    let phrase = format!(
        "{}{}{}",
        columns[term_index],
        SEPARATOR,
        columns[term_index + 1]
    );

    Some((phrase.into(), count))
}

pub(crate) fn read_to_string(path: &Path) -> Result<String, DictionaryError> {
    std::fs::read_to_string(path).map_err(|e| DictionaryError::io(path, e))
}
