/*
    Derivation budgets: how deep generation may recurse and how long a
    generated string may get
*/

use crate::error_handling::ConfigError;

pub const DEFAULT_MAX_DEPTH: usize = 10;
pub const DEFAULT_MAX_LEN: usize = 20;

// Bounds for the automatic policy. The curve below is a tunable default,
// not a contract; these constants are the knobs.
const AUTO_MIN_DEPTH: f64 = 7.0;
const AUTO_MAX_DEPTH: f64 = 15.0;
const AUTO_MIN_LEN: f64 = 10.0;
const AUTO_MAX_LEN: f64 = 30.0;

// Bounds on a single comparison run. max_depth counts expansions of
// nonterminals from the start symbol; max_len counts characters of a
// retained terminal string.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DerivationBudget {
    pub max_depth: usize,
    pub max_len: usize,
}

impl DerivationBudget {
    pub fn new(max_depth: usize, max_len: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if max_len == 0 {
            return Err(ConfigError::ZeroLength);
        }
        Ok(DerivationBudget { max_depth, max_len })
    }

    // Derives a budget from grammar size: smaller grammars can afford
    // deeper derivations, larger grammars produce longer strings sooner.
    // Both curves are clamped so a degenerate grammar cannot push the
    // budget to something useless or unaffordable.
    pub fn automatic(nonterminals_a: usize, nonterminals_b: usize) -> Self {
        let avg = (nonterminals_a + nonterminals_b) as f64 / 2.0;

        let depth = (AUTO_MAX_DEPTH - avg).trunc().clamp(AUTO_MIN_DEPTH, AUTO_MAX_DEPTH);
        let len = (5.0 * avg).trunc().clamp(AUTO_MIN_LEN, AUTO_MAX_LEN);

        DerivationBudget {
            max_depth: depth as usize,
            max_len: len as usize,
        }
    }
}

impl Default for DerivationBudget {
    fn default() -> Self {
        DerivationBudget {
            max_depth: DEFAULT_MAX_DEPTH,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}
