// veritab: truth tables for propositional logic formulas

use std::io::{self, BufRead, Write};

use veritab::eval::table::TruthTable;
use veritab::parser::lexer::Lexer;
use veritab::parser::parse::Parser;

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let program_name =
            args.first().map(|s| s.as_str()).unwrap_or("veritab");
        eprintln!("Error: Too many arguments");
        eprintln!();
        eprintln!("Usage: {} ['formula']", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} 'a & b => c'    # Print the table for a formula",
            program_name
        );
        eprintln!(
            "  {}                 # Prompt for a formula on stdin",
            program_name
        );
        std::process::exit(1);
    }

    let text = match args.get(1) {
        Some(formula) => formula.clone(),
        None => match read_formula() {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: Failed to read formula: {}", e);
                std::process::exit(1);
            }
        },
    };

    // Tokenize the formula
    let mut lexer = Lexer::new(&text);
    let tokens = match lexer.tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Parse the token stream
    let mut parser = Parser::new(tokens);
    let expr = match parser.parse() {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Enumerate every assignment and print the table
    let table = match TruthTable::build(&expr) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    print!("{}", table);
}

/// Prompt on stdout and read one formula line from stdin.
fn read_formula() -> io::Result<String> {
    let mut stdout = io::stdout();
    stdout.write_all(b"> ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line
        .trim_end_matches(|ch| ch == '\n' || ch == '\r')
        .to_string())
}
