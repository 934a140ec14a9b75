//! CLI command execution.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::matcher::{Classification, PhraseMatcher};
use crate::phonetic::{syllables_of, CmuDictionary, PhoneticLexicon};

use super::args::Commands;

/// Execute a parsed subcommand.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Check {
            phrase,
            dict,
            pattern,
            scheme,
            verbose,
        } => {
            let lexicon = load_lexicon(&dict)?;
            let matcher = PhraseMatcher::new(lexicon, pattern, scheme)?;
            match phrase {
                Some(phrase) => {
                    let classification = matcher.classify(&phrase);
                    print_classification(&classification, verbose);
                }
                None => {
                    for line in io::stdin().lock().lines() {
                        let line = line?;
                        let phrase = line.trim();
                        if phrase.is_empty() {
                            continue;
                        }
                        println!("{}", phrase.dimmed());
                        print_classification(&matcher.classify(phrase), verbose);
                    }
                }
            }
            Ok(())
        }

        Commands::Syllables { words, dict } => {
            let lexicon = load_lexicon(&dict)?;
            for word in &words {
                match syllables_of(&lexicon, word) {
                    Some(count) => println!("{word} {}", count.to_string().green()),
                    None => println!("{word} {}", "?".yellow()),
                }
            }
            Ok(())
        }

        Commands::Rhymes { word, dict, limit } => {
            let lexicon = load_lexicon(&dict)?;
            let mut rhymes: Vec<String> = lexicon.rhymes_for(&word).into_iter().collect();
            rhymes.sort();
            if let Some(limit) = limit {
                rhymes.truncate(limit);
            }
            if rhymes.is_empty() {
                println!("{}", "no rhymes found".yellow());
            }
            for rhyme in rhymes {
                println!("{rhyme}");
            }
            Ok(())
        }

        Commands::Repl {
            dict,
            pattern,
            scheme,
        } => {
            let lexicon = load_lexicon(&dict)?;
            let matcher = PhraseMatcher::new(lexicon, pattern, scheme)?;
            crate::repl::run(&matcher)
        }
    }
}

fn load_lexicon(path: &Path) -> Result<CmuDictionary> {
    let lexicon = CmuDictionary::from_path(path)
        .with_context(|| format!("could not load lexicon from {}", path.display()))?;
    eprintln!(
        "  Loaded {} word(s) from {}",
        lexicon.len().to_string().green().bold(),
        path.display().to_string().cyan()
    );
    Ok(lexicon)
}

/// Print a verdict line, with the annotated words and segmented lines when
/// verbose output is requested.
pub fn print_classification(classification: &Classification, verbose: bool) {
    if classification.is_match() {
        println!("{}", "match".green().bold());
    } else {
        println!(
            "{} {}",
            "no match".red().bold(),
            format!("({})", classification.outcome()).dimmed()
        );
    }

    if verbose {
        let annotated: Vec<String> = classification
            .words()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  {}", annotated.join(" "));
        if let Some(lines) = classification.lines() {
            for line in lines {
                println!("    {}", line.to_string().cyan());
            }
        }
    }
}
