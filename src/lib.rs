//! # hh-monitor
//!
//! Looks up how many vacancies spb.hh.ru lists for each programming language
//! and builds a timestamped report out of the counts.
//!
//! ## Main Components
//!
//! - [`VacancyMonitor`]: fetches one search page per language, concurrently
//! - [`find_vacancy_count`]: pulls the "N вакансий" number out of a page
//! - [`format_report`]: renders the `[YY-MM-DD HH:MM]` block
//! - [`Sink`]: prints the block or appends it to a file
//! - [`Args`]: command line arguments
//!
//! ## Example
//!
//! ```no_run
//! use hh_monitor_lib::{format_report, Args, Sink, VacancyMonitor};
//! use clap::Parser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let args = Args::parse();
//!     let monitor = VacancyMonitor::new(&args)?;
//!
//!     let stats = monitor.run(&args.langs).await;
//!     let entry = format_report(&stats, chrono::Local::now().naive_local());
//!
//!     Sink::from_path(args.file.as_deref()).write(&entry).await?;
//!     Ok(())
//! }
//! ```

mod args;
mod error;
mod extract;
mod report;
mod sink;
mod vacancy_monitor;

pub use crate::args::{Args, DEFAULT_ENDPOINT};
pub use crate::error::{MonitorError, Result};
pub use crate::extract::{find_vacancy_count, find_vacancy_marker};
pub use crate::report::{error_chain, format_report, LangStat, TIMESTAMP_FORMAT};
pub use crate::sink::{append_to_file, Sink};
pub use crate::vacancy_monitor::VacancyMonitor;
