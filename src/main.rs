use clap::Parser;
use miette::Result;
use osm::cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command {
        None | Some(Commands::Menu) => osm::cli::commands::menu::run(&cli.global),
        Some(Commands::Sup(cmd)) => osm::cli::commands::sup::run(cmd, &cli.global),
        Some(Commands::Mat(cmd)) => osm::cli::commands::mat::run(cmd, &cli.global),
        Some(Commands::Order(cmd)) => osm::cli::commands::order::run(cmd, &cli.global),
        Some(Commands::Data(cmd)) => osm::cli::commands::data::run(cmd, &cli.global),
        Some(Commands::Completions(args)) => osm::cli::commands::completions::run(args),
    }
}

/// Log to stderr; RUST_LOG wins over the -v count
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
