/// Date recognizer: DD/MM/YYYY, DD-MM-YYYY, DD.MM.YYYY
///
/// Both separators must be identical. Day is range-checked to 1..=31 and
/// month to 1..=12; the year keeps whatever 2-4 digits were written.
use lazy_static::lazy_static;
use regex::Regex;

use super::labels::{DAY, END, MONTH, SEPARATOR, START, YEAR};
use super::Trace;

lazy_static! {
    // The regex crate has no backreferences, so both separators are
    // captured and compared afterwards.
    static ref DATE_REGEX: Regex =
        Regex::new(r"^(\d{1,2})([/\-.])(\d{1,2})([/\-.])(\d{2,4})$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub trace: Trace,
}

pub fn recognize(token: &str) -> Option<DateMatch> {
    let caps = DATE_REGEX.captures(token)?;
    if &caps[2] != &caps[4] {
        return None;
    }

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[3].parse().ok()?;
    let year: u32 = caps[5].parse().ok()?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }

    Some(DateMatch {
        day,
        month,
        year,
        trace: vec![START, DAY, SEPARATOR, MONTH, SEPARATOR, YEAR, END],
    })
}
