//! Interactive REPL for classifying phrases.
//!
//! Reads a phrase per line, classifies it against the configured matcher,
//! and prints the verdict with the annotated words and segmented lines.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::commands::print_classification;
use crate::matcher::PhraseMatcher;
use crate::phonetic::PhoneticLexicon;

/// Run the REPL loop until EOF, interrupt, or an `exit` command.
pub fn run<L: PhoneticLexicon>(matcher: &PhraseMatcher<L>) -> Result<()> {
    print_banner(matcher);

    let mut editor = DefaultEditor::new()?;
    let scheme = matcher
        .rhyme_scheme()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".repeat(matcher.pattern().len()));
    let prompt = format!(
        "{} {}/{}> ",
        "scansion".bright_cyan().bold(),
        matcher.pattern().to_string().bright_yellow(),
        scheme.bright_magenta()
    );

    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                let phrase = line.trim();
                if phrase.is_empty() {
                    continue;
                }
                if phrase == "exit" || phrase == "quit" {
                    break;
                }
                let _ = editor.add_history_entry(phrase);
                print_classification(&matcher.classify(phrase), true);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}

fn print_banner<L: PhoneticLexicon>(matcher: &PhraseMatcher<L>) {
    println!();
    println!(
        "{}",
        "   scansion - Verse-Pattern Phrase Classification"
            .bright_cyan()
            .bold()
    );
    println!();
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!(
        "  Pattern: {}",
        matcher.pattern().to_string().bright_yellow()
    );
    if let Some(scheme) = matcher.rhyme_scheme() {
        println!("  Scheme:  {}", scheme.to_string().bright_magenta());
    }
    println!(
        "  Type a phrase to classify it; {} or {} to leave",
        "'exit'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!();
}
