//! Lexical segmentation of an argument string by prefix.
//!
//! A prefix only starts a new argument at the beginning of the string or
//! right after whitespace, so `e/amy@x.com/n/` stays one value. Nothing is
//! validated or trimmed here.

use tracing::debug;

use crate::{ArgumentMultimap, Prefix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PrefixPosition {
    start: usize,
    prefix: Prefix,
}

impl PrefixPosition {
    fn value_start(&self) -> usize {
        self.start + self.prefix.len()
    }
}

/// Splits `args` into a preamble and per-prefix values.
///
/// Only the given `prefixes` are recognized; any other text, including
/// other prefix literals, is part of the surrounding value.
///
/// # Examples
///
/// ```
/// use edutrack_parser::{PREFIX_GROUP, tokenize};
///
/// let args = tokenize("g/", &[PREFIX_GROUP]);
/// assert_eq!(args.get_value(PREFIX_GROUP), Some(""));
/// assert_eq!(args.preamble(), "");
/// ```
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_all_prefix_positions(args, prefixes);
    let map = extract_arguments(args, &positions);
    debug!(
        preamble = map.preamble(),
        arguments = positions.len(),
        "Tokenized command arguments"
    );
    map
}

fn find_all_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<PrefixPosition> {
    let mut positions: Vec<PrefixPosition> = prefixes
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .filter(move |(start, _)| is_argument_boundary(args, *start))
                .map(move |(start, _)| PrefixPosition { start, prefix })
        })
        .collect();

    // At a shared position the longer literal wins.
    positions.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.prefix.len().cmp(&a.prefix.len()))
    });
    positions.dedup_by_key(|position| position.start);
    positions
}

fn is_argument_boundary(args: &str, start: usize) -> bool {
    args[..start]
        .chars()
        .next_back()
        .is_none_or(char::is_whitespace)
}

fn extract_arguments(args: &str, positions: &[PrefixPosition]) -> ArgumentMultimap {
    let preamble_end = positions.first().map_or(args.len(), |first| first.start);
    let mut map = ArgumentMultimap::with_preamble(&args[..preamble_end]);

    for (i, position) in positions.iter().enumerate() {
        let value_end = positions.get(i + 1).map_or(args.len(), |next| next.start);
        map.put(position.prefix, &args[position.value_start()..value_end]);
    }

    map
}
