use std::error::Error;

use chrono::NaiveDateTime;

use crate::error::MonitorError;

/// Header layout, e.g. `[06-01-02 15:04]`.
pub const TIMESTAMP_FORMAT: &str = "[%y-%m-%d %H:%M]";

/// Outcome of looking up one language.
#[derive(Debug)]
pub struct LangStat {
    pub lang: String,
    pub vacancies: Result<u32, MonitorError>,
}

impl LangStat {
    pub fn new(lang: impl Into<String>, vacancies: Result<u32, MonitorError>) -> Self {
        LangStat {
            lang: lang.into(),
            vacancies,
        }
    }

    /// The `lang=value` line for this result, without the trailing newline.
    pub fn line(&self) -> String {
        match &self.vacancies {
            Ok(count) => format!("{}={}", self.lang, count),
            Err(e) => format!("{}={}", self.lang, error_chain(e)),
        }
    }
}

/// Build the report block: a timestamp header, then one line per language
/// in the order given.
pub fn format_report(stats: &[LangStat], now: NaiveDateTime) -> String {
    let mut entry = format!("{}\n", now.format(TIMESTAMP_FORMAT));
    for stat in stats {
        entry.push_str(&stat.line());
        entry.push('\n');
    }
    entry
}

/// Render an error followed by its causes, joined with `: `.
///
/// A cause already spelled out by the message before it is skipped.
pub fn error_chain(err: &dyn Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
