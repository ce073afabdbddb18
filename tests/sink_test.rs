use std::fs;

use chrono::NaiveDate;
use clap::Parser;
use hh_monitor_lib::{append_to_file, format_report, Args, MonitorError, Sink, VacancyMonitor};
use tempfile::TempDir;

const ENTRY: &str = "[25-01-01 10:00]\ngo=10\nrust=4\n";

#[tokio::test]
async fn appends_blocks_separated_by_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.txt");

    append_to_file(&path, ENTRY).await.unwrap();
    append_to_file(&path, ENTRY).await.unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, format!("{ENTRY}\n{ENTRY}\n"));
}

#[tokio::test]
async fn existing_contents_are_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("existing.txt");
    fs::write(&path, "old report\n\n").unwrap();

    Sink::from_path(Some(path.as_path())).write(ENTRY).await.unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, format!("old report\n\n{ENTRY}\n"));
}

#[tokio::test]
async fn unwritable_destination_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("stats.txt");

    let err = append_to_file(&path, ENTRY).await.unwrap_err();
    assert!(matches!(err, MonitorError::Io(_)));
    assert!(!path.exists());
}

#[test]
fn no_path_means_stdout() {
    assert!(matches!(Sink::from_path(None), Sink::Stdout));
}

#[tokio::test]
async fn file_without_langs_appends_header_only_block() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.txt");
    let path_arg = path.to_str().unwrap();

    let args = Args::try_parse_from(["hh-monitor", "-q", "-f", path_arg]).unwrap();
    let monitor = VacancyMonitor::new(&args).unwrap();
    let stats = monitor.run(&args.langs).await;
    assert!(stats.is_empty());

    let now = NaiveDate::from_ymd_opt(2025, 6, 9)
        .unwrap()
        .and_hms_opt(7, 30, 0)
        .unwrap();
    let entry = format_report(&stats, now);
    Sink::from_path(args.file.as_deref()).write(&entry).await.unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "[25-06-09 07:30]\n\n");
}
