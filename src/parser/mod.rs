/*
    This module parses grammar text into Grammar values
*/

mod lexer;
mod verifier;

use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use crate::grammar::*;
use crate::error_handling::*;
use itertools::Itertools;
use lexer::RawRule;

#[derive(Debug)]
pub enum ParseErrorType {
    // A line which should contain a rule has no `->`
    MissingArrow,
    // A rule line starts with `->`
    MissingHead,
    // The head contains whitespace
    MalformedHead(String),
    // The requested start symbol is not defined by any rule
    UndefinedStartSymbol(String),
    // The text contains no rules at all
    EmptyGrammar,
    // There was an issue with reading a file
    FileError(std::io::Error),
}

impl ErrorType for ParseErrorType {}

impl PartialEq for ParseErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ParseErrorType::FileError(a), ParseErrorType::FileError(b)) =>
                a.kind() == b.kind(),
            (ParseErrorType::MalformedHead(a), ParseErrorType::MalformedHead(b)) => a == b,
            (ParseErrorType::UndefinedStartSymbol(a), ParseErrorType::UndefinedStartSymbol(b)) => {
                a == b
            }
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Display for ParseErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorType::MissingArrow => write!(f, "Expected `->` (or `→`) in rule line"),
            ParseErrorType::MissingHead => {
                write!(f, "Rule has no head nonterminal before the arrow")
            }
            ParseErrorType::MalformedHead(head) => {
                write!(f, "Rule head `{}` must be a single symbol", head)
            }
            ParseErrorType::UndefinedStartSymbol(symbol) => {
                write!(f, "Start symbol `{}` has no rule", symbol)
            }
            ParseErrorType::EmptyGrammar => write!(f, "Grammar contains no rules"),
            ParseErrorType::FileError(e) => write!(f, "File error: {}", e),
        }
    }
}

pub type ParseError = Error<ParseErrorType>;
pub type ParseErrors = Errors<ParseErrorType>;

pub type Result<T> = std::result::Result<T, ParseErrorType>;
pub type FileResult<T> = std::result::Result<T, ParseErrors>;

fn io_error(error: std::io::Error, file: PathBuf) -> ParseError {
    ParseError {
        location: Location {
            file,
            line: 0
        },
        error: ParseErrorType::FileError(error)
    }
}

// A parsed grammar plus anything worth warning the user about
#[derive(Debug, PartialEq)]
pub struct Parse {
    pub grammar: Grammar,
    // Heads that appeared on more than one line and had their
    // alternatives merged
    pub merged_heads: Vec<String>,
}

fn is_rule_line(line: &str) -> bool {
    !line.trim().is_empty() && !line.trim_start().starts_with(';')
}

// Classifies one chunk of an alternative and appends its symbols to the
// body. A chunk that names a head is that nonterminal; otherwise, under
// the single-character-symbol convention, it is a run of juxtaposed
// one-character symbols. `*` is epsilon and contributes nothing.
fn push_chunk_symbols(
    chunk: &str,
    heads: &HashSet<&str>,
    single_char_symbols: bool,
    body: &mut Alternative,
) {
    if chunk == "*" {
        return;
    }
    if heads.contains(chunk) {
        body.push(Symbol::Nonterminal(chunk.to_string()));
        return;
    }
    if single_char_symbols {
        for c in chunk.chars() {
            if c == '*' {
                continue;
            }
            let name = c.to_string();
            if heads.contains(name.as_str()) {
                body.push(Symbol::Nonterminal(name));
            } else {
                body.push(Symbol::Terminal(name));
            }
        }
    } else {
        body.push(Symbol::Terminal(chunk.to_string()));
    }
}

// Splits every rule line, keeping its 1-based line number for error
// reporting. Lines that are blank or `;`-comments are skipped.
fn split_rules<'a>(text: &'a str, file: &PathBuf) -> FileResult<Vec<(usize, RawRule<'a>)>> {
    let split_lines = text.lines()
        .enumerate()
        .filter(|(_, line)| is_rule_line(line))
        .map(|(num, line)| (num + 1, lexer::split_rule(line)));

    let (rules, errors): (Vec<_>, Vec<_>) = split_lines.partition(|(_, rule)| rule.is_ok());
    if !errors.is_empty() {
        return Err(errors.into_iter().map(|(num, rule)| ParseError {
            location: Location { file: file.clone(), line: num },
            error: rule.unwrap_err()
        }).collect_vec());
    }

    Ok(rules.into_iter().map(|(num, rule)| (num, rule.unwrap())).collect_vec())
}

// Parses grammar text. Pass one collects the rule heads; pass two
// classifies every body symbol against them, so that a symbol is a
// nonterminal exactly when some rule defines it.
pub fn parse_text(text: &str, file: PathBuf, start_override: Option<&str>) -> FileResult<Parse> {
    let normalized = lexer::normalize(text);
    let rules = split_rules(&normalized, &file)?;

    let heads: HashSet<&str> = rules.iter().map(|(_, rule)| rule.head).collect();
    let single_char_symbols = !heads.is_empty()
        && heads.iter().all(|head| head.chars().count() == 1);

    let mut builder = GrammarBuilder::new();
    for (_, rule) in &rules {
        let alternatives = rule.alternatives.iter().map(|alternative| {
            let mut body = Alternative::new();
            for chunk in lexer::chunk_alternative(alternative) {
                push_chunk_symbols(chunk, &heads, single_char_symbols, &mut body);
            }
            body
        }).collect();
        builder.add_rule(rule.head.to_string(), alternatives);
    }

    let start_symbol = match start_override {
        Some(symbol) => symbol.to_string(),
        None => rules.first().map(|(_, rule)| rule.head.to_string()).unwrap_or_default(),
    };

    verifier::verify(&heads, &start_symbol, &file)?;

    let merged_heads = builder.merged_heads().to_vec();
    Ok(Parse {
        grammar: builder.finish(start_symbol),
        merged_heads,
    })
}

pub fn parse_file(path: &PathBuf, start_override: Option<&str>) -> FileResult<Parse> {
    let text = fs::read_to_string(path).map_err(|e| vec![io_error(e, path.clone())])?;
    parse_text(&text, path.clone(), start_override)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s_nonterminal(text: &str) -> Symbol {
        Symbol::Nonterminal(text.to_string())
    }

    fn s_terminal(text: &str) -> Symbol {
        Symbol::Terminal(text.to_string())
    }

    fn parse(text: &str) -> Parse {
        parse_text(text, PathBuf::new(), None).unwrap()
    }

    #[test]
    fn parse_single_rule() {
        let parsed = parse("S -> a");
        assert_eq!(parsed.grammar.start_symbol, "S");
        assert_eq!(parsed.grammar.nonterminals, vec!["S".to_string()]);
        assert_eq!(parsed.grammar.terminals, vec!["a".to_string()]);
        assert_eq!(parsed.grammar.rules["S"], vec![vec![s_terminal("a")]]);
        assert!(parsed.merged_heads.is_empty());
    }

    #[test]
    fn parse_juxtaposed_symbols() {
        // Single-character heads, so `aS` is the terminal a followed by
        // the nonterminal S
        let parsed = parse("S -> aS | a");
        assert_eq!(parsed.grammar.rules["S"], vec![
            vec![s_terminal("a"), s_nonterminal("S")],
            vec![s_terminal("a")]
        ]);
    }

    #[test]
    fn parse_multicharacter_symbols() {
        let parsed = parse("expr -> expr + term | term\nterm -> x");
        assert_eq!(parsed.grammar.nonterminals, vec!["expr".to_string(), "term".to_string()]);
        assert_eq!(parsed.grammar.rules["expr"], vec![
            vec![s_nonterminal("expr"), s_terminal("+"), s_nonterminal("term")],
            vec![s_nonterminal("term")]
        ]);
        assert_eq!(parsed.grammar.rules["term"], vec![vec![s_terminal("x")]]);
    }

    #[test]
    fn head_classification_is_two_pass() {
        // B is used before its rule appears; it must still be a nonterminal
        let parsed = parse("S -> B\nB -> b");
        assert_eq!(parsed.grammar.rules["S"], vec![vec![s_nonterminal("B")]]);
    }

    #[test]
    fn parse_epsilon_alternative() {
        let parsed = parse("S -> aS | *");
        assert_eq!(parsed.grammar.rules["S"], vec![
            vec![s_terminal("a"), s_nonterminal("S")],
            vec![]
        ]);
    }

    #[test]
    fn parse_unicode_arrow_and_epsilon() {
        let parsed = parse("S → aS | ε");
        assert_eq!(parsed.grammar.rules["S"], vec![
            vec![s_terminal("a"), s_nonterminal("S")],
            vec![]
        ]);
    }

    #[test]
    fn alternatives_on_one_line_are_not_reported_as_merged() {
        let parsed = parse("S -> a | b");
        assert!(parsed.merged_heads.is_empty());

        // The same grammar split over two lines is a merge
        let parsed = parse("S -> a\nS -> b");
        assert_eq!(parsed.merged_heads, vec!["S".to_string()]);
    }

    #[test]
    fn duplicate_heads_merge_in_order() {
        let parsed = parse("S -> a\nA -> b\nS -> c");
        assert_eq!(parsed.merged_heads, vec!["S".to_string()]);
        assert_eq!(parsed.grammar.rules["S"], vec![
            vec![s_terminal("a")],
            vec![s_terminal("c")]
        ]);
    }

    #[test]
    fn blank_and_comment_lines_skipped() {
        let parsed = parse("; a comment\n\nS -> a\n   \n; another\n");
        assert_eq!(parsed.grammar.rules["S"], vec![vec![s_terminal("a")]]);
    }

    #[test]
    fn malformed_line_reports_number_and_kind() {
        let errors = parse_text("S -> a\nnot a rule at all\n-> b", PathBuf::new(), None)
            .unwrap_err();
        assert_eq!(errors, vec![
            ParseError {
                location: Location { file: PathBuf::new(), line: 2 },
                error: ParseErrorType::MissingArrow
            },
            ParseError {
                location: Location { file: PathBuf::new(), line: 3 },
                error: ParseErrorType::MissingHead
            }
        ]);
    }

    #[test]
    fn start_symbol_defaults_to_first_head() {
        let parsed = parse("A -> b\nS -> a");
        assert_eq!(parsed.grammar.start_symbol, "A");
    }

    #[test]
    fn start_override_must_be_defined() {
        let parsed = parse_text("S -> a", PathBuf::new(), Some("X")).unwrap_err();
        assert_eq!(parsed[0].error, ParseErrorType::UndefinedStartSymbol("X".to_string()));

        let parsed = parse_text("S -> a\nA -> b", PathBuf::new(), Some("A")).unwrap();
        assert_eq!(parsed.grammar.start_symbol, "A");
    }

    #[test]
    fn empty_grammar_rejected() {
        let errors = parse_text("; nothing here\n", PathBuf::new(), None).unwrap_err();
        assert_eq!(errors[0].error, ParseErrorType::EmptyGrammar);
    }
}
