// minilang: front end demo driver

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use minilang::parser::parse::Parser;

/// Built-in demo program, used when no input file is given.
const DEMO_PROGRAM: &str = "\
    var a
    var b
    init a = 1
    init b = 5
    while a != b do
        calculate a = a + 1
        write a
        if a = b then
            write a
        endif
    endwhile
";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let source = match args.get(1) {
        Some(path) => {
            if !Path::new(path).exists() {
                eprintln!("Error: File '{}' not found", path);
                eprintln!(
                    "Usage: {} [file.mini]",
                    args.first().map(|s| s.as_str()).unwrap_or("minilang")
                );
                return ExitCode::FAILURE;
            }
            match fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("Error: Failed to read '{}': {}", path, e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => DEMO_PROGRAM.to_string(),
    };

    let parser = match Parser::new(&source) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("{}", e);
            println!("Parsing failed.");
            return ExitCode::FAILURE;
        }
    };

    // Echo every matched token, the way the parser sees them
    let mut parser =
        parser.with_trace(Box::new(|token| println!("Matched: {}", token)));

    match parser.parse_program() {
        Ok(program) => {
            println!("Parsing successful!");
            println!();
            println!("Abstract Syntax Tree:");
            print!("{}", program);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            println!("Parsing failed.");
            ExitCode::FAILURE
        }
    }
}
