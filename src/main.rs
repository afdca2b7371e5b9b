//! leetdocs CLI: regenerate problem pages, navigation and README badges.

use clap::Parser;
use miette::Result;

use leetdocs::api::LeetCodeClient;
use leetdocs::config::DocsConfig;
use leetdocs::ledger::Ledger;
use leetdocs::pipeline::Pipeline;

#[derive(Parser)]
#[command(
    name = "leetdocs",
    version,
    about = "Generate MkDocs pages and README badges for solved LeetCode problems"
)]
struct Cli {
    /// Any value limits the run to the first two problems (smoke test).
    smoke: Option<String>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = DocsConfig::discover()?;
    let client = LeetCodeClient::new(config.client_config());
    let ledger = Ledger::load(&config.ledger, config.timeout())?;

    let pipeline = Pipeline::new(&client, &config, ledger, cli.smoke.is_some())?;
    let report = pipeline.run()?;

    tracing::info!(
        pages = report.pages_written,
        solved = report.solved,
        total = report.num_total,
        "documentation updated"
    );
    println!(
        "Wrote {} pages; solved {}/{}",
        report.pages_written, report.solved, report.num_total
    );

    Ok(())
}
