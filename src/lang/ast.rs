use super::Column;
use std::rc::Rc;

/// Key names are stored upper-cased and resolved only when executed.
pub type KeyName = Rc<str>;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Pause(Column, DurationSpec),
    KeyDown(Column, KeyName, DurationSpec),
    KeyPress(Column, KeyName, DurationSpec),
    Key(Column, KeyName),
    Loop(Column, u32),
    EndLoop(Column),
}

/// ## Duration of a pause or key hold in milliseconds
///
/// A `Range` is inclusive on both ends and always has `min <= max`.
/// A new value is drawn from it every time its instruction executes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DurationSpec {
    Fixed(u64),
    Range(u64, u64),
}

impl DurationSpec {
    /// Parse `1.5` or `1.5-3.0` as seconds.
    pub fn from_seconds(s: &str) -> Option<DurationSpec> {
        DurationSpec::scaled(s, 1000.0)
    }

    /// Parse `150` or `50-150` as milliseconds. Decimals are truncated.
    pub fn from_millis(s: &str) -> Option<DurationSpec> {
        DurationSpec::scaled(s, 1.0)
    }

    fn scaled(s: &str, scale: f64) -> Option<DurationSpec> {
        // A dash in the first position is a sign, not a separator.
        let split = s.char_indices().skip(1).find(|&(_, ch)| ch == '-');
        match split {
            Some((idx, _)) => {
                let min = to_millis(&s[..idx], scale)?;
                let max = to_millis(&s[idx + 1..], scale)?;
                if min > max {
                    Some(DurationSpec::Range(max, min))
                } else {
                    Some(DurationSpec::Range(min, max))
                }
            }
            None => Some(DurationSpec::Fixed(to_millis(s, scale)?)),
        }
    }
}

/// Float to integer casts truncate toward zero and saturate, so
/// negative values become 0 ms.
fn to_millis(s: &str, scale: f64) -> Option<u64> {
    let val = s.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some((val * scale) as u64)
}

impl std::fmt::Display for DurationSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DurationSpec::Fixed(ms) => write!(f, "{}", ms),
            DurationSpec::Range(min, max) => write!(f, "{}..={}", min, max),
        }
    }
}
