use std::collections::HashSet;
use std::path::PathBuf;

use crate::error_handling::Location;
use super::{FileResult, ParseError, ParseErrorType};

// Checks the invariants a finished grammar must satisfy: there is at least
// one rule, and the start symbol is defined by one of them. Body symbols
// need no check of their own, since classification makes a symbol a
// nonterminal exactly when it has a rule.
pub fn verify(heads: &HashSet<&str>, start_symbol: &str, file: &PathBuf) -> FileResult<()> {
    let whole_file = Location { file: file.clone(), line: 0 };

    if heads.is_empty() {
        return Err(vec![ParseError {
            location: whole_file,
            error: ParseErrorType::EmptyGrammar
        }]);
    }

    if !heads.contains(start_symbol) {
        return Err(vec![ParseError {
            location: whole_file,
            error: ParseErrorType::UndefinedStartSymbol(start_symbol.to_string())
        }]);
    }

    Ok(())
}
