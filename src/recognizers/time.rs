/// Time recognizer: HH:MM, HH:MM:SS, optionally with an attached meridiem
/// (10:30AM, 10:30 A.M.). A meridiem written as its own token is merged in
/// by the cascade's lookahead, not here.
use lazy_static::lazy_static;
use regex::Regex;

use super::labels::{COLON, END, HOUR, MINUTE, PERIOD, SECOND, START};
use super::Trace;

lazy_static! {
    static ref TIME_REGEX: Regex =
        Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?\s*([AaPp]\.?[Mm]\.?)?$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// Parse a standalone meridiem marker ("AM", "pm", "P.M.")
pub fn parse_meridiem(token: &str) -> Option<Meridiem> {
    let cleaned: String = token
        .chars()
        .filter(|c| *c != '.')
        .collect::<String>()
        .to_uppercase();
    match cleaned.as_str() {
        "AM" => Some(Meridiem::Am),
        "PM" => Some(Meridiem::Pm),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMatch {
    pub hour: u32,
    pub minute: u32,
    pub second: Option<u32>,
    pub period: Option<Meridiem>,
    pub trace: Trace,
}

pub fn recognize(token: &str) -> Option<TimeMatch> {
    let caps = TIME_REGEX.captures(token)?;

    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let second: Option<u32> = match caps.get(3) {
        Some(s) => Some(s.as_str().parse().ok()?),
        None => None,
    };
    let period = caps.get(4).and_then(|p| parse_meridiem(p.as_str()));

    if hour > 23 || minute > 59 {
        return None;
    }
    if let Some(s) = second {
        if s > 59 {
            return None;
        }
    }

    let mut trace = vec![START, HOUR, COLON, MINUTE];
    if second.is_some() {
        trace.push(COLON);
        trace.push(SECOND);
    }
    if period.is_some() {
        trace.push(PERIOD);
    }
    trace.push(END);

    Some(TimeMatch {
        hour,
        minute,
        second,
        period,
        trace,
    })
}
