//! Task identifiers and the selector grammar.
//!
//! Grammar accepted by [`Selection::parse`]:
//!
//! ```text
//! selector := "l" | "latest" | day [ "-" part ]
//! day      := DIGIT [ DIGIT ]        (value 1-25)
//! part     := "1" | "2"
//! ```

use std::fmt;
use std::str::FromStr;

use super::AppError;

pub const FIRST_DAY: u8 = 1;
pub const LAST_DAY: u8 = 25;

/// A validated puzzle day in `1..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    pub fn new(value: u8) -> Option<Self> {
        (FIRST_DAY..=LAST_DAY).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Day {
    type Err = AppError;

    /// Parse a day argument such as the one given to `make-day`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Day::new)
            .ok_or_else(|| AppError::InvalidDay(s.to_string()))
    }
}

/// One of the two sub-problems of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'1' => Some(Part::One),
            b'2' => Some(Part::Two),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A fully specified task: a day and one of its parts.
///
/// The derived ordering (day, then part) is the catalog ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId {
    pub day: Day,
    pub part: Part,
}

impl TaskId {
    pub fn new(day: Day, part: Part) -> Self {
        Self { day, part }
    }

    /// Parse a task file stem of the shape `^\d{1,2}-[12]$`.
    ///
    /// Returns `None` for anything else, including days outside 1-25.
    pub fn from_file_stem(stem: &str) -> Option<Self> {
        let (digits, part) = split_selector(stem)?;
        let part = part?;
        let day = Day::new(parse_day_digits(digits))?;
        Some(Self { day, part })
    }

    /// File name of this task for the given extension, e.g. `3-1.ts`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self, extension)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.part)
    }
}

/// What the user asked to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The last task in catalog order.
    Latest,
    /// Any part of a day; the highest authored part wins.
    Day(Day),
    /// Exactly one task.
    Task(TaskId),
}

impl Selection {
    /// Parse a raw selector string.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw == "l" || raw == "latest" {
            return Ok(Selection::Latest);
        }

        let (digits, part) = split_selector(raw).ok_or_else(|| {
            AppError::invalid_selector(raw, "expected <day> or <day>-<part> with part 1 or 2")
        })?;

        let value = parse_day_digits(digits);
        let day = Day::new(value).ok_or_else(|| {
            AppError::invalid_selector(raw, format!("\"{}\" is not a valid day (must be 1-25)", value))
        })?;

        Ok(match part {
            Some(part) => Selection::Task(TaskId { day, part }),
            None => Selection::Day(day),
        })
    }
}

impl FromStr for Selection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selection::parse(s)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Latest => write!(f, "latest"),
            Selection::Day(day) => write!(f, "{}", day),
            Selection::Task(task) => write!(f, "{}", task),
        }
    }
}

/// Split `\d{1,2}(-[12])?` into its day digits and optional part.
fn split_selector(raw: &str) -> Option<(&str, Option<Part>)> {
    let bytes = raw.as_bytes();
    let digit_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if !(1..=2).contains(&digit_len) {
        return None;
    }

    let (digits, rest) = raw.split_at(digit_len);
    match rest.as_bytes() {
        [] => Some((digits, None)),
        [b'-', part] => Some((digits, Some(Part::from_byte(*part)?))),
        _ => None,
    }
}

fn parse_day_digits(digits: &str) -> u8 {
    digits.bytes().fold(0, |acc, b| acc * 10 + (b - b'0'))
}
