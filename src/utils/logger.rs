use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "wc_predictions=info";

fn filter_for(level: Option<&str>, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("wc_predictions=debug,info")
        } else if let Some(level) = level {
            EnvFilter::new(format!("wc_predictions={}", level))
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    })
}

pub fn init_cli_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(filter_for(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(filter_for(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}
