use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use resub::{sub_all_mut, sub_once_mut, Pattern, Replacement};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "resub")]
#[command(about = "Regex substitution with $N template references", long_about = None)]
#[command(version)]
struct Cli {
    /// Regular expression to search for
    pattern: String,

    /// Replacement template ($1 / ${1} for captures, \$ for a literal dollar)
    replacement: String,

    /// Subject text (read from stdin if omitted)
    subject: Option<String>,

    /// Replace only the first occurrence
    #[arg(short, long)]
    first: bool,

    /// Fail if the template references a group the pattern does not capture
    #[arg(short, long)]
    strict: bool,

    /// Print the number of substitutions to stderr
    #[arg(short, long)]
    count: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pattern = Pattern::new(&cli.pattern)
        .with_context(|| format!("cannot compile pattern {}", cli.pattern.yellow()))?;

    let from_stdin = cli.subject.is_none();
    let mut subject = match cli.subject {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read subject from stdin")?;
            buf
        }
    };

    let replacement = if cli.strict {
        Replacement::template_strict(&cli.replacement)
    } else {
        Replacement::template(&cli.replacement)
    };

    let count = if cli.first {
        sub_once_mut(&mut subject, &pattern, replacement)?
    } else {
        sub_all_mut(&mut subject, &pattern, replacement)?
    };

    // Stdin input carries its own trailing newline; argument input does not.
    if from_stdin {
        print!("{subject}");
    } else {
        println!("{subject}");
    }

    if cli.count {
        eprintln!("{}", format!("{count} substitution(s)").dimmed());
    }

    Ok(())
}
