/*
    Structural statistics about a grammar, for the report shown alongside
    a comparison
*/

use std::fmt::Display;

use crate::grammar::{Grammar, Symbol};

// Shape of one nonterminal's alternatives
#[derive(Debug, PartialEq, Default)]
pub struct RuleStats {
    pub alternatives: usize,
    pub epsilon: usize,
    pub terminal_only: usize,
    pub nonterminal_only: usize,
    pub mixed: usize,
}

impl Display for RuleStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} alternatives ({} epsilon, {} terminal-only, {} nonterminal-only, {} mixed)",
            self.alternatives, self.epsilon, self.terminal_only, self.nonterminal_only, self.mixed
        )
    }
}

#[derive(Debug, PartialEq)]
pub struct GrammarSummary {
    pub nonterminals: usize,
    pub terminals: usize,
    pub productions: usize,
    // Symbols per non-epsilon alternative
    pub average_body_len: f64,
}

impl Display for GrammarSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nonterminals, {} terminals, {} productions, average body length {:.1}",
            self.nonterminals, self.terminals, self.productions, self.average_body_len
        )
    }
}

pub fn summarize(grammar: &Grammar) -> GrammarSummary {
    let mut total_len = 0;
    let mut counted = 0;
    for head in &grammar.nonterminals {
        for body in &grammar.rules[head] {
            if !body.is_empty() {
                total_len += body.len();
                counted += 1;
            }
        }
    }

    GrammarSummary {
        nonterminals: grammar.nonterminal_count(),
        terminals: grammar.terminals.len(),
        productions: grammar.production_count(),
        average_body_len: total_len as f64 / counted.max(1) as f64,
    }
}

// Stats per nonterminal, in declaration order
pub fn rule_stats(grammar: &Grammar) -> Vec<(String, RuleStats)> {
    grammar.nonterminals.iter().map(|head| {
        let mut stats = RuleStats::default();
        for body in &grammar.rules[head] {
            stats.alternatives += 1;

            let has_terminal = body.iter().any(|s| matches!(s, Symbol::Terminal(_)));
            let has_nonterminal = body.iter().any(|s| matches!(s, Symbol::Nonterminal(_)));
            match (has_terminal, has_nonterminal) {
                (false, false) => stats.epsilon += 1,
                (true, false) => stats.terminal_only += 1,
                (false, true) => stats.nonterminal_only += 1,
                (true, true) => stats.mixed += 1,
            }
        }
        (head.clone(), stats)
    }).collect()
}
