use std::error::Error;

use chrono::Local;
use clap::Parser;
use hh_monitor_lib::{format_report, Args, Sink, VacancyMonitor};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logger(verbose: bool) {
    let default = if verbose {
        "hh_monitor=debug,hh_monitor_lib=debug"
    } else {
        "hh_monitor=warn,hh_monitor_lib=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logger(args.verbose);

    let monitor = VacancyMonitor::new(&args)?;
    let stats = monitor.run(&args.langs).await;
    let entry = format_report(&stats, Local::now().naive_local());

    let sink = Sink::from_path(args.file.as_deref());
    if let Err(e) = sink.write(&entry).await {
        error!("Failed to write report: {}", e);
        return Err(e.into());
    }

    info!("Reported {} languages", stats.len());
    Ok(())
}
