use super::{ParseErrorType, Result};

// Normalizes the two accepted spellings of the arrow and of epsilon so the
// rest of the parser only ever sees `->` and `*`
pub fn normalize(text: &str) -> String {
    text.replace('→', "->").replace('ε', "*")
}

// A rule line split into its head and the raw text of each alternative.
// Alternatives are trimmed; empty alternatives (stray `|`s) are dropped.
#[derive(PartialEq, Debug)]
pub struct RawRule<'a> {
    pub head: &'a str,
    pub alternatives: Vec<&'a str>,
}

pub fn split_rule(line: &str) -> Result<RawRule<'_>> {
    let (head, body) = line.split_once("->").ok_or(ParseErrorType::MissingArrow)?;

    let head = head.trim();
    if head.is_empty() {
        return Err(ParseErrorType::MissingHead);
    }
    if head.contains(char::is_whitespace) {
        return Err(ParseErrorType::MalformedHead(head.to_string()));
    }

    let alternatives = body.split('|')
        .map(str::trim)
        .filter(|alternative| !alternative.is_empty())
        .collect();

    Ok(RawRule { head, alternatives })
}

// Splits the raw text of one alternative into symbol chunks. Whether a
// chunk is one multi-character symbol or a run of juxtaposed
// single-character symbols is decided later, once all heads are known.
pub fn chunk_alternative(alternative: &str) -> Vec<&str> {
    alternative.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn normalize_arrows_and_epsilon() {
        assert_eq!(normalize("S → aS | ε"), "S -> aS | *");
        assert_eq!(normalize("S -> a"), "S -> a");
    }

    #[test]
    fn split_normal_rule() {
        let lines = vec![
            "S -> aS | b",
            "expr -> expr + term | term",
            "S->a"
        ];
        let answers = vec![
            RawRule { head: "S", alternatives: vec!["aS", "b"] },
            RawRule { head: "expr", alternatives: vec!["expr + term", "term"] },
            RawRule { head: "S", alternatives: vec!["a"] }
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(split_rule(line).unwrap(), answer);
        }
    }

    #[test]
    fn split_drops_empty_alternatives() {
        let rule = split_rule("S -> a | | b |").unwrap();
        assert_eq!(rule.alternatives, vec!["a", "b"]);
    }

    #[test]
    fn split_malformed_rule() {
        assert_eq!(split_rule("just some prose"), Err(ParseErrorType::MissingArrow));
        assert_eq!(split_rule("-> a | b"), Err(ParseErrorType::MissingHead));
        assert_eq!(
            split_rule("S T -> a"),
            Err(ParseErrorType::MalformedHead("S T".to_string()))
        );
    }

    #[test]
    fn chunk_whitespace_separated_symbols() {
        assert_eq!(chunk_alternative("expr + term"), vec!["expr", "+", "term"]);
        assert_eq!(chunk_alternative("aS"), vec!["aS"]);
        assert_eq!(chunk_alternative("  a   b "), vec!["a", "b"]);
    }
}
