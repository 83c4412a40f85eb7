/*
    This module searches for a nonterminal renaming that makes two
    grammars generate the same bounded language
*/

use itertools::Itertools;

use crate::compare::{compare, Comparison};
use crate::error_handling::ConfigError;
use crate::generator::generate;
use crate::grammar::{Grammar, SymbolMapping};
use crate::params::DerivationBudget;

// The search tries every injective assignment of nonterminals, which is
// factorial in the grammar size
pub const MAX_SEARCH_NONTERMINALS: usize = 7;

// Searches for a renaming of `second`'s nonterminals under which it
// generates the same language as `first`, within the budget. The start
// symbols are paired up front; the remaining nonterminals are tried as
// injective assignments sized to the smaller set, in declaration order, so
// the first successful mapping is the same on every run. `Ok(None)` means
// the search space was exhausted without success.
pub fn find_mapping(
    first: &Grammar,
    second: &Grammar,
    budget: &DerivationBudget,
) -> Result<Option<SymbolMapping>, ConfigError> {
    check_search_feasible(first, second)?;

    let language_first = generate(first, budget);
    for mapping in candidate_mappings(first, second) {
        let renamed = second.rename_nonterminals(&mapping);
        let language_renamed = generate(&renamed, budget);
        if compare(&language_first, &language_renamed) == Comparison::Equivalent {
            return Ok(Some(mapping));
        }
    }
    Ok(None)
}

// Guard run before the factorial search is allowed to start
fn check_search_feasible(first: &Grammar, second: &Grammar) -> Result<(), ConfigError> {
    for grammar in [first, second] {
        let count = grammar.nonterminal_count();
        if count > MAX_SEARCH_NONTERMINALS {
            return Err(ConfigError::TooManyNonterminals {
                count,
                limit: MAX_SEARCH_NONTERMINALS,
            });
        }
    }

    let shares_terminal = second.terminals.iter().any(|t| first.terminals.contains(t));
    if !first.terminals.is_empty() && !second.terminals.is_empty() && !shares_terminal {
        return Err(ConfigError::DisjointTerminals);
    }

    Ok(())
}

// Lazily produces candidate mappings from `second`'s nonterminals to
// `first`'s. Every candidate pairs the start symbols; the remaining
// nonterminals of the larger side are drawn as ordered selections sized to
// the smaller side, so grammars with differing nonterminal counts still
// get a (partial, injective) search rather than a rejection.
fn candidate_mappings(first: &Grammar, second: &Grammar) -> impl Iterator<Item = SymbolMapping> {
    let rest_first = first.nonterminals.iter()
        .filter(|name| **name != first.start_symbol)
        .cloned()
        .collect_vec();
    let rest_second = second.nonterminals.iter()
        .filter(|name| **name != second.start_symbol)
        .cloned()
        .collect_vec();

    let start_pair = (second.start_symbol.clone(), first.start_symbol.clone());

    let second_is_smaller = rest_second.len() <= rest_first.len();
    let candidates: Box<dyn Iterator<Item = SymbolMapping>> = if second_is_smaller {
        Box::new(rest_first.into_iter()
            .permutations(rest_second.len())
            .map(move |targets| {
                let mut mapping = SymbolMapping::from([start_pair.clone()]);
                mapping.extend(rest_second.iter().cloned().zip(targets));
                mapping
            }))
    } else {
        Box::new(rest_second.into_iter()
            .permutations(rest_first.len())
            .map(move |sources| {
                let mut mapping = SymbolMapping::from([start_pair.clone()]);
                mapping.extend(sources.into_iter().zip(rest_first.iter().cloned()));
                mapping
            }))
    };
    candidates
}
