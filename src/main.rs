//! churn - command-line entry point

use churnscope::cli::{self, Cli};
use churnscope::ui::output;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse_args();

    init_tracing(cli.debug);

    if let Err(e) = cli::run(cli) {
        output::error(format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initialize tracing; logs go to stderr so stdout stays clean for `--json`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
