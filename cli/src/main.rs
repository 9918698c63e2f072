use std::io;
use std::process;

fn main() {
    let code = fivedraw_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    process::exit(code);
}
