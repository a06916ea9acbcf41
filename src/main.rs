//! NovaSyntax CLI
//!
//! Command-line driver that tokenizes and parses NovaSyntax scripts.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use nova_syntax::error::Diagnostic;
use nova_syntax::{Lexer, NovaResult, Parser, VERSION};

/// Flags controlling a single invocation
#[derive(Default)]
struct Options {
    show_tokens: bool,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut options = Options::default();
    let mut show_help = false;
    let mut filename: Option<&String> = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tokens" | "-t" => options.show_tokens = true,
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    match filename {
        Some(file) => {
            if let Err(e) = run_file(file, &options) {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        None => {
            println!("NovaSyntax v{} - Parser REPL", VERSION);
            println!("Type 'exit' to quit\n");
            repl(&options);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: nova [OPTIONS] [script]");
    eprintln!("       nova --help");
}

fn print_help() {
    println!("NovaSyntax v{} - lexer and parser", VERSION);
    println!();
    println!("USAGE:");
    println!("    nova [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    -t, --tokens    Show tokenization output (lexer only)");
    println!("    -v, --verbose   Report constructs the parser skipped");
    println!("    -h, --help      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    nova script.nova           Parse a script and list its declarations");
    println!("    nova --tokens script.nova  Show tokens from lexer");
    println!("    nova                       Start interactive REPL");
}

/// Read a script and process it
fn run_file(filename: &str, options: &Options) -> Result<(), String> {
    let source = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    process_source(&source, Some(filename), options)
        .map_err(|e| Diagnostic::with_source(&e, &source).to_string())
}

/// Tokenize `source`, then either dump the tokens or print each parsed node
fn process_source(source: &str, filename: Option<&str>, options: &Options) -> NovaResult<()> {
    let tokens = Lexer::new(source, filename).tokenize()?;

    if options.show_tokens {
        println!("NovaSyntax Lexer Output");
        println!("{}", "-".repeat(60));
        for token in &tokens {
            println!("{}", token);
        }
        println!("{}", "-".repeat(60));
        let keywords = tokens.iter().filter(|t| t.kind.is_keyword()).count();
        println!("Total tokens: {} ({} keywords)", tokens.len(), keywords);
        return Ok(());
    }

    let mut parser = Parser::new(tokens)?;
    for node in parser.parse_program() {
        println!("{}", node);
    }

    if options.verbose {
        for error in parser.diagnostics() {
            eprint!("{}", Diagnostic::with_source(error, source).as_warning());
        }
    }

    Ok(())
}

/// Start an interactive REPL (Read-Eval-Print Loop)
fn repl(options: &Options) {
    let mut line_number = 1;

    loop {
        print!("nova:{} > ", line_number);
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                if let Err(e) = process_source(input, Some("<repl>"), options) {
                    eprint!("{}", Diagnostic::with_source(&e, input));
                }

                line_number += 1;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
