use minnow::cli;

fn main() {
    cli::run();
}
