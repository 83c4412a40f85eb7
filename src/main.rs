mod analysis;
mod cli;
mod compare;
mod error_handling;
mod generator;
mod grammar;
mod mapping;
mod params;
mod parser;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use compare::Comparison;
use generator::GeneratedLanguage;
use params::DerivationBudget;
use parser::Parse;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    match run(&args) {
        Ok(equivalent) => {
            if equivalent {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(()) => ExitCode::from(2),
    }
}

// Errors have already been printed when this returns Err; Ok carries
// whether the grammars came out equivalent
fn run(args: &cli::Cli) -> Result<bool, ()> {
    let first = load_grammar(&args.first, args.start_first.as_deref())?;
    let second = load_grammar(&args.second, args.start_second.as_deref())?;

    let budget = resolve_budget(args, &first.grammar, &second.grammar)
        .map_err(|error| eprintln!("{}", error))?;
    println!(
        "Budget: max depth {}, max length {}",
        budget.max_depth, budget.max_len
    );

    describe_grammar("First grammar", &first, args.verbose);
    describe_grammar("Second grammar", &second, args.verbose);

    let report = compare::check_equivalence(
        &first.grammar,
        &second.grammar,
        &budget,
        !args.no_mapping,
    );
    if let Some(reason) = &report.mapping_skipped {
        eprintln!("Warning: mapping search skipped: {}", reason);
    }

    print_language("Strings generated by the first grammar", &report.language_first);
    print_language("Strings generated by the second grammar", &report.language_second);

    match &report.outcome {
        Comparison::Equivalent => {
            println!("The grammars appear equivalent up to the given depth and length.");
            Ok(true)
        }
        Comparison::EquivalentUnderMapping(mapping) => {
            println!("The grammars appear equivalent under a renaming of nonterminals:");
            for (from, to) in mapping {
                println!("  {} -> {}", from, to);
            }
            Ok(true)
        }
        Comparison::NotEquivalent { only_in_first, only_in_second } => {
            println!("The grammars are not equivalent for the given depth and length.");
            if !args.no_mapping && report.mapping_skipped.is_none() {
                println!("No equivalence-preserving mapping was found within the search limits.");
            }
            print_language("Only in the first grammar", only_in_first);
            print_language("Only in the second grammar", only_in_second);
            Ok(false)
        }
    }
}

fn load_grammar(path: &PathBuf, start_override: Option<&str>) -> Result<Parse, ()> {
    match parser::parse_file(path, start_override) {
        Ok(parsed) => {
            for head in &parsed.merged_heads {
                eprintln!(
                    "Warning: `{}` has rules on more than one line of {}; \
                     their alternatives were combined",
                    head,
                    path.display()
                );
            }
            Ok(parsed)
        }
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error);
            }
            Err(())
        }
    }
}

fn resolve_budget(
    args: &cli::Cli,
    first: &grammar::Grammar,
    second: &grammar::Grammar,
) -> Result<DerivationBudget, error_handling::ConfigError> {
    if args.auto {
        return Ok(DerivationBudget::automatic(
            first.nonterminal_count(),
            second.nonterminal_count(),
        ));
    }
    match (args.depth, args.len) {
        (None, None) => Ok(DerivationBudget::default()),
        (depth, len) => DerivationBudget::new(
            depth.unwrap_or(params::DEFAULT_MAX_DEPTH),
            len.unwrap_or(params::DEFAULT_MAX_LEN),
        ),
    }
}

fn describe_grammar(label: &str, parsed: &Parse, verbose: bool) {
    println!("{}: {}", label, analysis::summarize(&parsed.grammar));
    if verbose {
        print!("{}", parsed.grammar);
        for (head, stats) in analysis::rule_stats(&parsed.grammar) {
            println!("  {}: {}", head, stats);
        }
    }
}

fn print_language(label: &str, language: &GeneratedLanguage) {
    println!("{} ({} strings):", label, language.len());
    for string in language {
        if string.is_empty() {
            println!("  (empty string)");
        } else {
            println!("  {}", string);
        }
    }
}
