use clap::Parser;

fn main() {
    let cli = fireauth_cli::Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
