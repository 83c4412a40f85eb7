/*
    This module compares generated languages and drives a whole
    equivalence check
*/

use crate::error_handling::ConfigError;
use crate::generator::{generate, GeneratedLanguage};
use crate::grammar::{Grammar, SymbolMapping};
use crate::mapping::find_mapping;
use crate::params::DerivationBudget;

// The outcome of comparing two grammars under one budget. Always an
// approximation: equivalence holds for the generated samples, not
// necessarily for the full languages.
#[derive(Debug, PartialEq)]
pub enum Comparison {
    Equivalent,
    EquivalentUnderMapping(SymbolMapping),
    NotEquivalent {
        only_in_first: GeneratedLanguage,
        only_in_second: GeneratedLanguage,
    },
}

// Classifies two generated languages by symmetric difference. Mapping
// search is a separate fallback; this never attempts it.
pub fn compare(first: &GeneratedLanguage, second: &GeneratedLanguage) -> Comparison {
    if first == second {
        return Comparison::Equivalent;
    }
    Comparison::NotEquivalent {
        only_in_first: first.difference(second).cloned().collect(),
        only_in_second: second.difference(first).cloned().collect(),
    }
}

// Everything a caller needs to present one comparison run
#[derive(Debug, PartialEq)]
pub struct EquivalenceReport {
    pub language_first: GeneratedLanguage,
    pub language_second: GeneratedLanguage,
    pub outcome: Comparison,
    // Set when the mapping search was wanted but its guard refused to
    // start it; the direct differences above still stand
    pub mapping_skipped: Option<ConfigError>,
}

// Runs a full check: generate both languages, compare them directly, and
// only if they differ (and the caller asked for it) search for a
// nonterminal renaming of the second grammar. A failed search leaves the
// direct differences in the outcome, as does a search the guard refused
// to start.
pub fn check_equivalence(
    first: &Grammar,
    second: &Grammar,
    budget: &DerivationBudget,
    try_mapping: bool,
) -> EquivalenceReport {
    let language_first = generate(first, budget);
    let language_second = generate(second, budget);

    let direct = compare(&language_first, &language_second);
    let mut mapping_skipped = None;
    let outcome = match direct {
        Comparison::NotEquivalent { .. } if try_mapping => {
            match find_mapping(first, second, budget) {
                Ok(Some(mapping)) => Comparison::EquivalentUnderMapping(mapping),
                Ok(None) => direct,
                Err(reason) => {
                    mapping_skipped = Some(reason);
                    direct
                }
            }
        }
        other => other,
    };

    EquivalenceReport {
        language_first,
        language_second,
        outcome,
        mapping_skipped,
    }
}
