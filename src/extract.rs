use std::sync::LazyLock;

use regex::bytes::Regex;

// ASCII digits only: `\d` would also accept other Unicode digits that never parse.
static VACANCY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+) ваканс").expect("vacancy marker pattern is valid"));

/// Find the first "N ваканс..." marker in a search page and return N.
///
/// Returns `None` when the page has no marker at all. A marker whose number
/// does not fit in a `u32` counts as zero.
pub fn find_vacancy_marker(page: &[u8]) -> Option<u32> {
    let caps = VACANCY_MARKER.captures(page)?;
    let digits = std::str::from_utf8(&caps[1]).ok()?;
    Some(digits.parse().unwrap_or(0))
}

/// Vacancy count shown on a search page, zero when no marker is present.
pub fn find_vacancy_count(page: &[u8]) -> u32 {
    find_vacancy_marker(page).unwrap_or(0)
}
