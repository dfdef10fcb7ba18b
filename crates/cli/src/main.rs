use std::process::ExitCode;

fn main() -> ExitCode {
    pricey_cli::run()
}
