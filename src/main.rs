use std::{env, fs::read_to_string, process::exit};

use abap_lexer::{lexer::scanner::tokenize, render_error};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let source = read_to_string(file_path).expect("Failed to read file!");

    match tokenize(&source) {
        Ok(tokens) => {
            for token in &tokens {
                token.debug();
            }
        }
        Err(error) => {
            eprintln!("{}", render_error(&source, &error));
            exit(1);
        }
    }
}
