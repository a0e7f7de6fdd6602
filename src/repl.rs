//! The minnow shell loop: read a line, tokenize, dispatch, repeat.

use std::io::{self, Write};

use crate::shell::{execute, tokenize, LoopControl};

/// Main shell entry point. Returns when a builtin asks to exit or stdin
/// reaches end-of-file.
pub fn run_repl() {
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                // EOF (Ctrl+D)
                println!();
                break;
            }
            Ok(_) => {
                let tokens = tokenize(&line);
                if execute(&tokens) == LoopControl::Exit {
                    break;
                }
            }
            Err(e) => {
                eprintln!("minnow: error reading input: {e}");
                break;
            }
        }
    }
}
