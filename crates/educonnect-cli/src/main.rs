mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print::print_error(&e);
        std::process::exit(1);
    }
}
