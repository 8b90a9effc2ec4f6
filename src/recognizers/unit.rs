/// Unit recognizer: a number glued (or space-joined) to a measurement unit
/// symbol from a fixed closed set — 5kg, 10km, 2.5l, 25°C, 500MB, 3किमी.
use lazy_static::lazy_static;
use regex::Regex;

use super::labels::{END, NUMBER, START, UNIT_SYMBOL};
use super::Trace;

/// Mass, length, volume, temperature, speed, frequency, power, data size,
/// plus the Devanagari equivalents.
const UNIT_SYMBOLS: &str = "kg|g|mg\
    |km|m|cm|mm|mi|ft|in\
    |l|ml|kl\
    |°C|°F|K\
    |kmph|mph|m/s\
    |Hz|kHz|MHz|GHz\
    |W|kW|MW|V|A\
    |KB|MB|GB|TB\
    |किमी|मी|सेमी|किग्रा|ग्रा|ली|मिली";

lazy_static! {
    static ref UNIT_REGEX: Regex = Regex::new(&format!(
        r"^(\d+(?:\.\d+)?)\s*({})$",
        UNIT_SYMBOLS
    ))
    .unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMatch {
    /// Numeric part as written (may contain a decimal point)
    pub number: String,
    /// Unit symbol exactly as written
    pub unit: String,
    pub trace: Trace,
}

pub fn recognize(token: &str) -> Option<UnitMatch> {
    let caps = UNIT_REGEX.captures(token)?;
    Some(UnitMatch {
        number: caps[1].to_string(),
        unit: caps[2].to_string(),
        trace: vec![START, NUMBER, UNIT_SYMBOL, END],
    })
}
