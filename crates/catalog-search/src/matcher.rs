//! Substring and pinyin matching.

use pinyin::ToPinyin;
use std::collections::HashSet;

/// One haystack character after normalization.
#[derive(Debug, Clone, Copy)]
enum Unit {
    Han {
        ch: char,
        syllable: &'static str,
        initial: &'static str,
    },
    Literal(char),
}

fn units(text: &str) -> Vec<Unit> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_pinyin() {
            Some(p) => Unit::Han {
                ch: c,
                syllable: p.plain(),
                initial: p.first_letter(),
            },
            None => Unit::Literal(c),
        })
        .collect()
}

/// Contiguous match state over `units` and `needle`.
///
/// A state is a unit index plus a byte offset into the needle. Failed states
/// are remembered, so each one is explored at most once across every start
/// position.
struct Search<'a> {
    units: &'a [Unit],
    needle: &'a str,
    failed: HashSet<(usize, usize)>,
}

impl<'a> Search<'a> {
    fn new(units: &'a [Unit], needle: &'a str) -> Self {
        Self {
            units,
            needle,
            failed: HashSet::new(),
        }
    }

    fn match_from(&mut self, index: usize, offset: usize) -> bool {
        let full = self.needle;
        let needle = &full[offset..];
        if needle.is_empty() {
            return true;
        }
        let Some(&unit) = self.units.get(index) else {
            return false;
        };
        if self.failed.contains(&(index, offset)) {
            return false;
        }

        let found = match unit {
            Unit::Literal(c) => {
                needle.starts_with(c) && self.match_from(index + 1, offset + c.len_utf8())
            }
            Unit::Han {
                ch,
                syllable,
                initial,
            } => {
                let mut next: Vec<usize> = [
                    needle.strip_prefix(ch),
                    needle.strip_prefix(syllable),
                    needle.strip_prefix(initial),
                ]
                .into_iter()
                .flatten()
                .map(|tail| full.len() - tail.len())
                .collect();
                // single-letter syllables consume the same bytes as their initial
                next.sort_unstable();
                next.dedup();

                next.into_iter().any(|at| self.match_from(index + 1, at))
                    // needle ends partway through this syllable
                    || syllable.starts_with(needle)
            }
        };

        if !found {
            self.failed.insert((index, offset));
        }
        found
    }
}

/// Contiguous pinyin match of `needle` somewhere in `haystack`.
///
/// Each Han character can be matched by itself, its toneless syllable or
/// its initial letter; the last one may also be matched by a syllable
/// prefix. Everything else matches literally. Whitespace is ignored on
/// both sides and comparison is case-insensitive.
pub fn phonetic_match(haystack: &str, needle: &str) -> bool {
    let needle: String = needle
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if needle.is_empty() {
        return true;
    }

    let units = units(&haystack.to_lowercase());
    let mut search = Search::new(&units, &needle);
    (0..units.len()).any(|start| search.match_from(start, 0))
}

/// Case-insensitive containment, or a [`phonetic_match`].
pub fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase()) || phonetic_match(haystack, needle)
}
