use std::path::PathBuf;
use std::fmt::Display;

pub trait ErrorType: Display + PartialEq {}

#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.file.display())
        } else {
            write!(f, "{}:{}", self.file.display(), self.line)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

pub type Errors<T> = Vec<Error<T>>;

// Errors in the comparison setup itself rather than in a grammar file.
// These have no meaningful file location.
#[derive(Debug, PartialEq, Clone)]
pub enum ConfigError {
    // A max_depth of zero would prune every derivation
    ZeroDepth,
    // A max_len of zero would only ever admit the empty string
    ZeroLength,
    // The mapping search is factorial in the nonterminal count
    TooManyNonterminals { count: usize, limit: usize },
    // Mapping was requested but the grammars share no terminals at all
    DisjointTerminals,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroDepth => write!(f, "Maximum derivation depth must be positive"),
            ConfigError::ZeroLength => write!(f, "Maximum string length must be positive"),
            ConfigError::TooManyNonterminals { count, limit } => write!(
                f,
                "Grammar has {} nonterminals; the mapping search is limited to {}",
                count, limit
            ),
            ConfigError::DisjointTerminals => write!(
                f,
                "The grammars share no terminal symbols, so no renaming of nonterminals \
                 can make them equivalent"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
