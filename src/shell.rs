//! Builtin commands, tokenizer, and external-command launch for the
//! interactive shell.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::process::Command;

use crate::cli::output::Reporter;
use crate::errors::print_error;
use crate::harness;

/// Lines printed per page by the `show` builtin.
const PAGE_SIZE: usize = 5;

/// Names of the builtin commands, in dispatch order.
pub const BUILTINS: &[&str] = &["cd", "help", "exit", "show", "run"];

/// Whether the shell loop should keep reading commands after this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Naive whitespace tokenizer.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Execute one tokenized command: a builtin if the name matches, an
/// external launch otherwise. Empty input is a no-op.
pub fn execute(tokens: &[String]) -> LoopControl {
    let Some(name) = tokens.first() else {
        return LoopControl::Continue;
    };
    match name.as_str() {
        "cd" => builtin_cd(&tokens[1..]),
        "help" => builtin_help(),
        "exit" => LoopControl::Exit,
        "show" => builtin_show(&tokens[1..]),
        "run" => builtin_run(&tokens[1..]),
        _ => launch(tokens),
    }
}

fn builtin_cd(args: &[String]) -> LoopControl {
    match args.first() {
        None => eprintln!("minnow: expected argument to \"cd\""),
        Some(dir) => {
            if let Err(e) = env::set_current_dir(dir) {
                eprintln!("minnow: cd: {e}");
            }
        }
    }
    LoopControl::Continue
}

fn builtin_help() -> LoopControl {
    println!("minnow, a toy shell");
    println!("Type program names and arguments, and hit enter.");
    println!("The following are built in:");
    for name in BUILTINS {
        println!("  {name}");
    }
    LoopControl::Continue
}

fn builtin_show(args: &[String]) -> LoopControl {
    let Some(path) = args.first() else {
        eprintln!("Usage: show <filename>");
        return LoopControl::Continue;
    };
    if let Err(e) = page_file(Path::new(path)) {
        eprintln!("minnow: show: {e}");
    }
    LoopControl::Continue
}

/// Print a file a page at a time, waiting for ENTER between pages.
fn page_file(path: &Path) -> io::Result<()> {
    let file = File::open(path)?;
    let mut page = 1;
    let mut line_count = 0;
    for line in BufReader::new(file).lines() {
        println!("{}", line?);
        line_count += 1;
        if line_count == PAGE_SIZE {
            println!("--- Press ENTER for next page ---");
            let mut pause = String::new();
            io::stdin().read_line(&mut pause)?;
            page += 1;
            println!("\nPage {page}\n");
            line_count = 0;
        }
    }
    Ok(())
}

/// The `run` builtin: hand the three corpus paths to the test engine.
/// Fatal engine errors are printed; the shell keeps running either way.
fn builtin_run(args: &[String]) -> LoopControl {
    let [target, input, expected] = args else {
        eprintln!("Usage: run <target> <input-corpus> <expected-corpus>");
        return LoopControl::Continue;
    };
    let mut reporter = Reporter::new();
    if let Err(e) = harness::run_corpus(
        Path::new(target),
        Path::new(input),
        Path::new(expected),
        &mut reporter,
    ) {
        print_error(e);
    }
    LoopControl::Continue
}

/// Launch a non-builtin command and block until it terminates.
fn launch(tokens: &[String]) -> LoopControl {
    let mut command = Command::new(&tokens[0]);
    command.args(&tokens[1..]);
    match command.status() {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            eprintln!("minnow: command not found: {}", tokens[0]);
        }
        Err(e) => eprintln!("minnow: {e}"),
    }
    LoopControl::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_splits_on_any_whitespace() {
        assert_eq!(tokenize("run a.py  in.txt\tout.txt"), ["run", "a.py", "in.txt", "out.txt"]);
        assert_eq!(tokenize("  \t "), Vec::<String>::new());
    }

    #[test]
    fn empty_input_continues_the_loop() {
        assert_eq!(execute(&[]), LoopControl::Continue);
    }

    #[test]
    fn exit_stops_the_loop() {
        assert_eq!(execute(&["exit".to_string()]), LoopControl::Exit);
    }

    #[test]
    fn run_with_wrong_arity_continues_the_loop() {
        let tokens = tokenize("run only-two args");
        assert_eq!(execute(&tokens), LoopControl::Continue);
    }

    #[test]
    fn builtin_table_includes_the_test_engine() {
        assert!(BUILTINS.contains(&"run"));
    }
}
