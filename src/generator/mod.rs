/*
    This module enumerates the terminal strings a grammar derives within a
    budget
*/

use std::collections::BTreeSet;

use crate::grammar::{Grammar, Symbol};
use crate::params::DerivationBudget;

// The distinct terminal strings derivable within a budget. This is a sound
// but incomplete sample of the grammar's language: every member is
// derivable, but derivations needing more depth or length than the budget
// allows are pruned, so an infinite language is only ever seen in part.
pub type GeneratedLanguage = BTreeSet<String>;

// Enumerates every terminal string derivable from the start symbol within
// the budget. Purely a function of its inputs: alternatives are tried in
// declaration order and the result is a sorted set, so two calls with the
// same grammar and budget always agree.
pub fn generate(grammar: &Grammar, budget: &DerivationBudget) -> GeneratedLanguage {
    let mut language = GeneratedLanguage::new();
    let start = vec![Symbol::Nonterminal(grammar.start_symbol.clone())];
    expand(grammar, &start, budget.max_depth, budget.max_len, String::new(), &mut language);
    language
}

// Leftmost bounded expansion of a sentential form. Expanding a nonterminal
// costs one unit of depth; emitting a terminal costs its character count
// from the remaining length. A branch that runs out of either budget is
// abandoned without being reported.
fn expand(
    grammar: &Grammar,
    pending: &[Symbol],
    depth: usize,
    remaining_len: usize,
    derived: String,
    language: &mut GeneratedLanguage,
) {
    match pending.first() {
        // Every symbol bottomed out in terminals
        None => {
            language.insert(derived);
        }
        Some(Symbol::Terminal(text)) => {
            let cost = text.chars().count();
            if cost > remaining_len {
                return;
            }
            let mut grown = derived;
            grown.push_str(text);
            expand(grammar, &pending[1..], depth, remaining_len - cost, grown, language);
        }
        Some(Symbol::Nonterminal(name)) => {
            if depth == 0 {
                return;
            }
            let Some(rewrite) = grammar.rules.get(name) else {
                return;
            };
            for alternative in rewrite {
                let mut form = alternative.clone();
                form.extend_from_slice(&pending[1..]);
                expand(grammar, &form, depth - 1, remaining_len, derived.clone(), language);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::parser::parse_text;

    fn grammar(text: &str) -> Grammar {
        parse_text(text, PathBuf::new(), None).unwrap().grammar
    }

    fn budget(max_depth: usize, max_len: usize) -> DerivationBudget {
        DerivationBudget::new(max_depth, max_len).unwrap()
    }

    fn language(strings: &[&str]) -> GeneratedLanguage {
        strings.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn generate_finite_grammar() {
        let g = grammar("S -> a | b");
        assert_eq!(generate(&g, &budget(3, 3)), language(&["a", "b"]));
    }

    #[test]
    fn generate_recursive_grammar_bounded_by_depth() {
        // Each `a` costs one expansion of S
        let g = grammar("S -> aS | a");
        assert_eq!(generate(&g, &budget(3, 10)), language(&["a", "aa", "aaa"]));
    }

    #[test]
    fn generate_recursive_grammar_bounded_by_length() {
        let g = grammar("S -> aS | a");
        assert_eq!(generate(&g, &budget(10, 2)), language(&["a", "aa"]));
    }

    #[test]
    fn generate_epsilon_includes_empty_string() {
        let g = grammar("S -> aS | *");
        assert_eq!(generate(&g, &budget(4, 10)), language(&["", "a", "aa", "aaa"]));
    }

    #[test]
    fn generated_strings_respect_max_len() {
        let g = grammar("S -> aS | bS | *");
        let max_len = 4;
        for string in generate(&g, &budget(8, max_len)) {
            assert!(string.chars().count() <= max_len);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let g = grammar("S -> AB | BA\nA -> a | aA\nB -> b | bB");
        let b = budget(5, 6);
        assert_eq!(generate(&g, &b), generate(&g, &b));
    }

    #[test]
    fn deeper_budget_never_loses_strings() {
        let g = grammar("S -> aSb | *");
        let small = generate(&g, &budget(3, 6));
        let deeper = generate(&g, &budget(5, 6));
        let longer = generate(&g, &budget(3, 10));
        assert!(small.is_subset(&deeper));
        assert!(small.is_subset(&longer));
    }

    #[test]
    fn multicharacter_terminals_count_their_length() {
        let g = grammar("greeting -> hi greeting | hi");
        // Each `hi` costs two characters
        assert_eq!(generate(&g, &budget(10, 5)), language(&["hi", "hihi"]));
    }

    #[test]
    fn nested_nonterminals_share_the_depth_budget() {
        let g = grammar("S -> A\nA -> a");
        // S -> A and A -> a are two expansions
        assert_eq!(generate(&g, &budget(1, 5)), language(&[]));
        assert_eq!(generate(&g, &budget(2, 5)), language(&["a"]));
    }
}
