/*
    This module is for storing and manipulating grammars
*/

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

// The base unit in a grammar rule
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(s) => s,
            Symbol::Nonterminal(s) => s,
        }
    }
}

// The symbols in a single alternative. An empty alternative is the
// epsilon production.
pub type Alternative = Vec<Symbol>;

// The alternatives of a rewrite rule
pub type Rewrite = Vec<Alternative>;

// A renaming of nonterminals, from one grammar's names to another's
pub type SymbolMapping = BTreeMap<String, String>;

#[derive(Debug, PartialEq, Clone)]
pub struct Grammar {
    pub start_symbol: String,
    // Rule heads in first-appearance order
    pub nonterminals: Vec<String>,
    // Terminals in first-appearance order
    pub terminals: Vec<String>,
    pub rules: HashMap<String, Rewrite>,
}

impl Grammar {
    pub fn nonterminal_count(&self) -> usize {
        self.nonterminals.len()
    }

    pub fn production_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    // Renames nonterminals according to the mapping, in rule heads and in
    // production bodies alike. Unmapped nonterminals keep their names, so a
    // partial mapping yields a partially renamed grammar.
    pub fn rename_nonterminals(&self, mapping: &SymbolMapping) -> Grammar {
        let renamed = |name: &str| -> String {
            mapping.get(name).cloned().unwrap_or_else(|| name.to_string())
        };

        let mut builder = GrammarBuilder::new();
        for head in &self.nonterminals {
            let alternatives = self.rules[head].iter().map(|alternative| {
                alternative.iter().map(|symbol| match symbol {
                    Symbol::Nonterminal(name) => Symbol::Nonterminal(renamed(name)),
                    terminal => terminal.clone(),
                }).collect()
            }).collect();
            builder.add_rule(renamed(head), alternatives);
        }
        builder.finish(renamed(&self.start_symbol))
    }
}

// Accumulates rules one alternative at a time, merging alternatives for
// repeated heads, then finalizes into an immutable Grammar. Repeats of an
// identical alternative under the same head are dropped.
pub struct GrammarBuilder {
    heads: Vec<String>,
    terminals: Vec<String>,
    rules: HashMap<String, Rewrite>,
    merged_heads: Vec<String>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        GrammarBuilder {
            heads: Vec::new(),
            terminals: Vec::new(),
            rules: HashMap::new(),
            merged_heads: Vec::new(),
        }
    }

    // Adds one rule line's worth of alternatives. A head is only counted
    // as merged when it already has a rule from an earlier call; the
    // alternatives of a single line never trigger the merge warning.
    pub fn add_rule(&mut self, head: String, alternatives: Vec<Alternative>) {
        for body in &alternatives {
            for symbol in body {
                if let Symbol::Terminal(name) = symbol {
                    if !self.terminals.contains(name) {
                        self.terminals.push(name.clone());
                    }
                }
            }
        }

        if self.rules.contains_key(&head) {
            if !self.merged_heads.contains(&head) {
                self.merged_heads.push(head.clone());
            }
        } else {
            self.heads.push(head.clone());
        }

        let rewrite = self.rules.entry(head).or_default();
        for body in alternatives {
            if !rewrite.contains(&body) {
                rewrite.push(body);
            }
        }
    }

    // Heads that appeared on more than one rule line, in encounter order
    pub fn merged_heads(&self) -> &[String] {
        &self.merged_heads
    }

    pub fn finish(self, start_symbol: String) -> Grammar {
        Grammar {
            start_symbol,
            nonterminals: self.heads,
            terminals: self.terminals,
            rules: self.rules,
        }
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for head in &self.nonterminals {
            let alternatives = self.rules[head].iter()
                .map(|body| {
                    if body.is_empty() {
                        "*".to_string()
                    } else {
                        body.iter().map(Symbol::name).collect::<Vec<_>>().join(" ")
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{} -> {}", head, alternatives)?;
        }
        Ok(())
    }
}
