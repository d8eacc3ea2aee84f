// src/data/fields.rs

//! The catalog of REPY line kinds: literal separator lines and one named
//! regular expression per field-bearing line.
//!
//! Patterns are written against the report's _visual order_, so Hebrew
//! keywords appear reversed, e.g. `רטסמס` is "סמסטר" (semester).
//!
//! Functions here are pure: each `match_*` function inspects one line and
//! returns `Ok(None)` when the line is not of its kind. Advancing through the
//! report is left to the [`RepyParser`].
//!
//! [`RepyParser`]: crate::readers::repyparser::RepyParser

use crate::common::{CourseId, GroupId, Hours, LineNumber, RepyError, ResultRepy};
use crate::data::bidi::{hebrew_flip, reverse_plain};
use crate::data::catalog::{
    normalize_year,
    Date,
    Event,
    GroupType,
    HoursKind,
    MinutesSinceMidnight,
    WeeklyHours,
};

use std::str::FromStr;

use ::chrono::Weekday;
use ::const_format::concatcp;
use ::itertools::Itertools; // for `join`
use ::lazy_static::lazy_static;
use ::regex::{Captures, Regex};
#[allow(unused_imports)]
use ::si_trace_print::{dpfn, dpfo, dpfx, dpfñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// literal lines
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const FACULTY_SEP: &str = "+==========================================+";
pub const COURSE_SEP: &str = "+------------------------------------------+";
/// First line of the group region header, "מס. ++++++".
pub const GROUP_SEP1: &str = "|               ++++++                  .סמ|";
/// Second line of the group region header, "רישום".
pub const GROUP_SEP2: &str = "|                                     םושיר|";
pub const BLANK_LINE1: &str = "|                               -----      |";
pub const BLANK_LINE2: &str = "|                                          |";

pub const SPORTS_FACULTY_SEP: &str = "+===============================================================+";
pub const SPORTS_COURSE_SEP: &str = "+---------------------------------------------------------------+";

/// The sports faculty has no name line; it is always this.
pub const SPORTS_FACULTY_NAME: &str = "מקצועות ספורט";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// regular expressions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A regular expression pattern, passed to [`regex::Regex::new`].
///
/// [`regex::Regex::new`]: https://docs.rs/regex/1.11.1/regex/struct.Regex.html#method.new
pub type RegexPattern = str;

/// Regex capture group name.
pub type CaptureGroupName = str;

pub const CGN_LOCATION: &CaptureGroupName = "location";
pub const CGN_START_HOUR: &CaptureGroupName = "startHour";
pub const CGN_START_MINUTE: &CaptureGroupName = "startMinute";
pub const CGN_END_HOUR: &CaptureGroupName = "endHour";
pub const CGN_END_MINUTE: &CaptureGroupName = "endMinute";
pub const CGN_WEEKDAY: &CaptureGroupName = "weekday";
pub const CGN_GROUP_TYPE: &CaptureGroupName = "groupType";
pub const CGN_GROUP_ID: &CaptureGroupName = "groupID";

/// `| <name> <id> |`
pub const RP_ID_AND_NAME: &RegexPattern = r"\| *(.*) +([0-9]{5,6}) +\|";

/// `| <points> :קנ <hours>:עובשב הארוה תועש |`
pub const RP_HOURS_AND_POINTS: &RegexPattern =
    r"\| *([0-9]+\.[0-9]+) *:קנ *(([0-9]+-[התפמ] *)+):עובשב הארוה תועש *\|";

/// `| ... dd/mm/yy 'X םוי : ... דעומ |`. The test time at the end of the line
/// is ignored.
pub const RP_TEST_DATE: &RegexPattern = r"\|.*([0-9]{2})/([0-9]{2})/([0-9]{2}) *'. +םוי *:.*דעומ +\|";

/// `| <name> : יארחא הרומ |`
pub const RP_LECTURER_IN_CHARGE: &RegexPattern = r"\| *(.*) : *יארחא *הרומ *\|";

/// `|   ----   |` inside the course head.
pub const RP_SEPARATOR_LINE: &RegexPattern = r"\| +-+ *\|";

/// `| <name> - תועש תכרעמ |`
pub const RP_FACULTY_NAME: &RegexPattern = r"\| *([א-ת\., ]+) *- *תועש תכרעמ *\|";

/// `| <semester> רטסמס |`
pub const RP_FACULTY_SEMESTER: &RegexPattern = r#"\| *([א-ת" ]+) +רטסמס *\|"#;

/// `| <semester> רטסמס - טרופס תועוצקמ |`
pub const RP_SPORTS_SEMESTER: &RegexPattern = r#"\| *([א-ת" ]+) +רטסמס *- *טרופס תועוצקמ *\|"#;

/// `| <name> : הצרמ |` or `| <name> : לגרתמ |`
pub const RP_LECTURER: &RegexPattern = r"\| *(.*) *: *(הצרמ|לגרתמ) *\|";

/// `<building> <room>`, e.g. `בואט 009`.
pub const RP_STANDARD_LOCATION: &RegexPattern = r"([א-ת]+) ([0-9]+)";

/// A row of the group table.
///
/// `| <location> HH.MM-HH.MM'<weekday> :<group type> <group id> |`
pub const RP_EVENT: &RegexPattern = concatcp!(
    r"\| *",
    r"(?P<", CGN_LOCATION, r">.*) +",
    r"(?P<", CGN_START_HOUR, r">[0-9]{1,2})\.(?P<", CGN_START_MINUTE, r">[0-9]{2})- *",
    r"(?P<", CGN_END_HOUR, r">[0-9]{1,2})\.(?P<", CGN_END_MINUTE, r">[0-9]{2})'",
    r"(?P<", CGN_WEEKDAY, r">[אבגדהוש]) ",
    r"(:(?P<", CGN_GROUP_TYPE, r">[א-ת]+))?",
    r" +(?P<", CGN_GROUP_ID, r">[0-9]+)? ",
    r"*\|"
);

/// Every line pattern, compiled once.
pub struct LinePatterns {
    pub id_and_name: Regex,
    pub hours_and_points: Regex,
    pub test_date: Regex,
    pub lecturer_in_charge: Regex,
    pub separator_line: Regex,
    pub faculty_name: Regex,
    pub faculty_semester: Regex,
    pub sports_semester: Regex,
    pub lecturer: Regex,
    pub standard_location: Regex,
    pub event: Regex,
}

lazy_static! {
    /// Process-wide read-only table of compiled line patterns.
    pub static ref LINE_PATTERNS: LinePatterns = LinePatterns {
        id_and_name: Regex::new(RP_ID_AND_NAME).unwrap(),
        hours_and_points: Regex::new(RP_HOURS_AND_POINTS).unwrap(),
        test_date: Regex::new(RP_TEST_DATE).unwrap(),
        lecturer_in_charge: Regex::new(RP_LECTURER_IN_CHARGE).unwrap(),
        separator_line: Regex::new(RP_SEPARATOR_LINE).unwrap(),
        faculty_name: Regex::new(RP_FACULTY_NAME).unwrap(),
        faculty_semester: Regex::new(RP_FACULTY_SEMESTER).unwrap(),
        sports_semester: Regex::new(RP_SPORTS_SEMESTER).unwrap(),
        lecturer: Regex::new(RP_LECTURER).unwrap(),
        standard_location: Regex::new(RP_STANDARD_LOCATION).unwrap(),
        event: Regex::new(RP_EVENT).unwrap(),
    };
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// lookup tables
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Weekday from its Hebrew letter, `א` is Sunday.
pub fn weekday_from_letter(letter: &str) -> Option<Weekday> {
    match letter {
        "א" => Some(Weekday::Sun),
        "ב" => Some(Weekday::Mon),
        "ג" => Some(Weekday::Tue),
        "ד" => Some(Weekday::Wed),
        "ה" => Some(Weekday::Thu),
        "ו" => Some(Weekday::Fri),
        "ש" => Some(Weekday::Sat),
        _ => None,
    }
}

/// Group type from its visual-order Hebrew word.
pub fn group_type_from_word(word: &str) -> Option<GroupType> {
    match word {
        "האצרה" => Some(GroupType::Lecture),
        "לוגרת" | "ליגרת" => Some(GroupType::Tutorial),
        "הדבעמ" => Some(GroupType::Lab),
        _ => None,
    }
}

/// Kind of weekly hours from its one-letter code.
pub fn hours_kind_from_code(code: &str) -> Option<HoursKind> {
    match code {
        "ה" => Some(HoursKind::Lecture),
        "ת" => Some(HoursKind::Tutorial),
        "מ" => Some(HoursKind::Lab),
        "פ" => Some(HoursKind::Project),
        _ => None,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parse a number from a substring that a pattern guarantees is digits.
///
/// Failure (e.g. overflow) is an [`InvariantViolation`].
///
/// [`InvariantViolation`]: crate::common::RepyError::InvariantViolation
pub fn parse_number<T>(
    s: &str,
    line: LineNumber,
) -> ResultRepy<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    s.parse::<T>()
        .map_err(|err| RepyError::InvariantViolation {
            line,
            detail: format!("couldn't parse number {:?}: {}", s, err),
        })
}

/// Replace each run of whitespace with one space, trim the ends.
pub fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().join(" ")
}

/// Text of capture group `index`, or `""`.
#[inline(always)]
fn group<'a>(
    captures: &Captures<'a>,
    index: usize,
) -> &'a str {
    captures
        .get(index)
        .map_or("", |m| m.as_str())
}

/// Text of named capture group `name`, or `""`.
#[inline(always)]
fn named<'a>(
    captures: &Captures<'a>,
    name: &CaptureGroupName,
) -> &'a str {
    captures
        .name(name)
        .map_or("", |m| m.as_str())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// course head
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Course id and logical-order course name.
pub fn match_id_and_name(
    text: &str,
    line: LineNumber,
) -> ResultRepy<Option<(CourseId, String)>> {
    let captures = match LINE_PATTERNS.id_and_name.captures(text) {
        Some(captures) => captures,
        None => return Ok(None),
    };
    let name = hebrew_flip(group(&captures, 1));
    let id: CourseId = parse_number(group(&captures, 2), line)?;

    Ok(Some((id, name)))
}

/// Parse the hour descriptors of a hours-and-points line, e.g. `1-ת 2-ה`.
pub fn parse_total_hours(
    total_hours: &str,
    line: LineNumber,
) -> ResultRepy<WeeklyHours> {
    dpfn!("({:?})", total_hours);
    let mut weekly_hours = WeeklyHours::default();
    for descriptor in total_hours.split_whitespace() {
        let (count, code) = match descriptor.split_once('-') {
            Some(val) => val,
            None => {
                return Err(RepyError::FieldFormat {
                    line,
                    field: "hour descriptor",
                    text: descriptor.to_string(),
                });
            }
        };
        let hours: Hours = parse_number(count, line)?;
        let kind = match hours_kind_from_code(code) {
            Some(kind) => kind,
            None => {
                return Err(RepyError::UnknownToken {
                    line,
                    kind: "hour descriptor",
                    token: code.to_string(),
                });
            }
        };
        if weekly_hours.add(kind, hours).is_none() {
            return Err(RepyError::InvariantViolation {
                line,
                detail: format!("weekly hours overflow at descriptor {:?}", descriptor),
            });
        }
    }
    dpfx!("return {}", weekly_hours);

    Ok(weekly_hours)
}

/// Academic points and weekly hours.
pub fn match_hours_and_points(
    text: &str,
    line: LineNumber,
) -> ResultRepy<Option<(f32, WeeklyHours)>> {
    let captures = match LINE_PATTERNS.hours_and_points.captures(text) {
        Some(captures) => captures,
        None => return Ok(None),
    };
    let points: f32 = parse_number(group(&captures, 1), line)?;
    let weekly_hours = parse_total_hours(group(&captures, 2), line)?;

    Ok(Some((points, weekly_hours)))
}

/// Test date, year normalized by [`normalize_year`].
///
/// [`normalize_year`]: crate::data::catalog::normalize_year
pub fn match_test_date(
    text: &str,
    line: LineNumber,
) -> ResultRepy<Option<Date>> {
    let captures = match LINE_PATTERNS.test_date.captures(text) {
        Some(captures) => captures,
        None => return Ok(None),
    };
    let day: u32 = parse_number(group(&captures, 1), line)?;
    let month: u32 = parse_number(group(&captures, 2), line)?;
    let year: u32 = parse_number(group(&captures, 3), line)?;

    Ok(Some(Date::new(normalize_year(year), month, day)))
}

/// Logical-order name of the lecturer in charge of the course.
pub fn match_lecturer_in_charge(text: &str) -> Option<String> {
    LINE_PATTERNS
        .lecturer_in_charge
        .captures(text)
        .map(|captures| hebrew_flip(group(&captures, 1)))
}

/// Is `text` a `|  ----  |` line?
pub fn is_separator_line(text: &str) -> bool {
    LINE_PATTERNS
        .separator_line
        .is_match(text)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// faculty head
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn match_flipped(
    regex: &Regex,
    text: &str,
) -> Option<String> {
    regex
        .captures(text)
        .map(|captures| reverse_plain(group(&captures, 1).trim()))
}

pub fn match_faculty_name(text: &str) -> Option<String> {
    match_flipped(&LINE_PATTERNS.faculty_name, text)
}

pub fn match_faculty_semester(text: &str) -> Option<String> {
    match_flipped(&LINE_PATTERNS.faculty_semester, text)
}

pub fn match_sports_semester(text: &str) -> Option<String> {
    match_flipped(&LINE_PATTERNS.sports_semester, text)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// group region
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Logical-order name of a group lecturer or teaching assistant.
pub fn match_lecturer(text: &str) -> Option<String> {
    LINE_PATTERNS
        .lecturer
        .captures(text)
        .map(|captures| hebrew_flip(&collapse_spaces(group(&captures, 1))))
}

/// Logical-order location. `<building> <room>` keeps the room as a number,
/// dropping leading zeros; any other location is reversed whole.
pub fn parse_location(
    s: &str,
    line: LineNumber,
) -> ResultRepy<String> {
    let captures = match LINE_PATTERNS.standard_location.captures(s) {
        Some(captures) => captures,
        None => return Ok(hebrew_flip(s)),
    };
    let building = hebrew_flip(group(&captures, 1));
    let room: u32 = parse_number(group(&captures, 2), line)?;

    Ok(format!("{} {}", building, room))
}

/// One row of the group table.
#[derive(Clone, Debug, PartialEq)]
pub struct EventLine {
    pub event: Event,
    /// Present on the first row of each group.
    pub group_type: Option<GroupType>,
    /// Usually absent on the first group of a course.
    pub group_id: Option<GroupId>,
}

/// Match one row of the group table.
pub fn match_event(
    text: &str,
    line: LineNumber,
) -> ResultRepy<Option<EventLine>> {
    let captures = match LINE_PATTERNS.event.captures(text) {
        Some(captures) => captures,
        None => return Ok(None),
    };
    dpfo!("event captures {:?}", captures);

    let letter = named(&captures, CGN_WEEKDAY);
    let day = match weekday_from_letter(letter) {
        Some(day) => day,
        None => {
            return Err(RepyError::UnknownToken {
                line,
                kind: "weekday letter",
                token: letter.to_string(),
            });
        }
    };
    let start_minute = MinutesSinceMidnight::from_hours_minutes(
        parse_number(named(&captures, CGN_START_HOUR), line)?,
        parse_number(named(&captures, CGN_START_MINUTE), line)?,
    );
    let end_minute = MinutesSinceMidnight::from_hours_minutes(
        parse_number(named(&captures, CGN_END_HOUR), line)?,
        parse_number(named(&captures, CGN_END_MINUTE), line)?,
    );
    let location = parse_location(named(&captures, CGN_LOCATION), line)?;

    let group_type: Option<GroupType> = match captures.name(CGN_GROUP_TYPE) {
        None => None,
        Some(word) => match group_type_from_word(word.as_str()) {
            Some(group_type) => Some(group_type),
            None => {
                return Err(RepyError::UnknownToken {
                    line,
                    kind: "group type",
                    token: word.as_str().to_string(),
                });
            }
        },
    };
    let group_id: Option<GroupId> = match captures.name(CGN_GROUP_ID) {
        None => None,
        Some(id) => Some(parse_number(id.as_str(), line)?),
    };

    Ok(Some(EventLine {
        event: Event {
            day,
            location,
            start_minute,
            end_minute,
        },
        group_type,
        group_id,
    }))
}
