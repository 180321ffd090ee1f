use clap::Parser;
use listo::cli::commands::Cli;
use listo::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = listo::tui::run(cli.data_dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            listo::logging::init_stderr();
            if let Err(e) = handlers::dispatch(cli) {
                tracing::debug!(error = ?e, "command failed");
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
