//! Next-free directory number allocation

use axl_core::model::LineEntry;

/// Next free extension under the filter prefix.
///
/// Takes the numeric maximum of the listed patterns carrying the prefix and
/// adds one. Agent DNs are fixed-width, so the numeric maximum is the last
/// assigned extension. Patterns without the prefix, and patterns that are
/// not plain numbers (translation patterns with wildcards show up in the
/// same listing), are ignored. `None` when nothing usable is listed.
///
/// Nothing locks the cluster between the listing and the later addLine, so
/// two concurrent runs can mint the same number.
pub fn next_extension(lines: &[LineEntry], filter_prefix: &str) -> Option<u64> {
    lines
        .iter()
        .filter(|line| line.pattern.starts_with(filter_prefix))
        .filter_map(|line| line.pattern.parse::<u64>().ok())
        .max()
        .map(|last| last + 1)
}
