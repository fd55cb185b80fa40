//! Binary entry point for the `azulejo` CLI.

use std::io;
use std::process;

fn main() {
    let code = azulejo_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    process::exit(code);
}
