// src/data/catalog.rs

//! Implements the parsed data model: [`Catalog`], [`Faculty`], [`Course`],
//! [`Group`] and [`Event`].
//!
//! The `serde` derivations here _are_ the JSON export format consumed by
//! downstream tools, field for field.

use crate::common::{CourseId, GroupId, Hours};

use std::fmt;

use ::chrono::Weekday;
use ::serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Catalog and Faculty
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// All of the information in a REPY file, faculties in document order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub faculties: Vec<Faculty>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.faculties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faculties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Faculty> {
        self.faculties.iter()
    }

    /// Sum of courses over all faculties.
    pub fn course_count(&self) -> usize {
        self.faculties
            .iter()
            .map(|faculty| faculty.courses.len())
            .sum()
    }
}

/// A set of courses offered by a faculty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub name: String,
    /// Informational only; the report does not keep this consistent across
    /// faculties.
    pub semester: String,
    pub courses: Vec<Course>,
}

impl fmt::Display for Faculty {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "faculty({}, {})", self.name, self.courses.len())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Course
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn is_zero(hours: &Hours) -> bool {
    *hours == 0
}

/// The kind of activity a weekly-hours count refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HoursKind {
    Lecture,
    Tutorial,
    Lab,
    Project,
}

/// Weekly hours of a course, by activity kind. Zero counts are omitted from
/// the JSON export.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct WeeklyHours {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub lecture: Hours,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub tutorial: Hours,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub lab: Hours,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub project: Hours,
}

impl WeeklyHours {
    /// Add `hours` to the count of `kind`, returning the new count.
    ///
    /// `None` on overflow; the count is left unchanged.
    pub fn add(
        &mut self,
        kind: HoursKind,
        hours: Hours,
    ) -> Option<Hours> {
        let slot: &mut Hours = match kind {
            HoursKind::Lecture => &mut self.lecture,
            HoursKind::Tutorial => &mut self.tutorial,
            HoursKind::Lab => &mut self.lab,
            HoursKind::Project => &mut self.project,
        };
        *slot = slot.checked_add(hours)?;

        Some(*slot)
    }

    /// Sum of `self` and `other` per kind. `None` if any kind overflows.
    pub fn checked_add(
        mut self,
        other: WeeklyHours,
    ) -> Option<WeeklyHours> {
        self.add(HoursKind::Lecture, other.lecture)?;
        self.add(HoursKind::Tutorial, other.tutorial)?;
        self.add(HoursKind::Lab, other.lab)?;
        self.add(HoursKind::Project, other.project)?;

        Some(self)
    }
}

impl fmt::Display for WeeklyHours {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(
            f,
            "{{lecture:{} tutorial:{} lab:{} project:{}}}",
            self.lecture, self.tutorial, self.lab, self.project
        )
    }
}

/// A Technion course.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Always a multiple of one half.
    pub academic_points: f32,
    #[serde(default)]
    pub lecturer_in_charge: Option<String>,
    #[serde(default)]
    pub weekly_hours: WeeklyHours,
    #[serde(default)]
    pub test_dates: Vec<Date>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl fmt::Display for Course {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(
            f,
            "{{Course[{}] ({:?}) AP:{:.1} Hours:{} lecturer:{:?} testDates:[",
            self.id,
            self.name,
            self.academic_points,
            self.weekly_hours,
            self.lecturer_in_charge.as_deref().unwrap_or_default(),
        )?;
        for (i, date) in self.test_dates.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", date)?;
        }
        write!(f, "] groups:{}}}", self.groups.len())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Date
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Year as written in the report.
pub type Year = u32;

/// A timezone-free calendar date. Not validated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Date {
    pub year: Year,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub const fn new(
        year: Year,
        month: u32,
        day: u32,
    ) -> Date {
        Date { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Two-digit years are in the 2000s. Anything `>= 100` is already a full
/// year.
pub const fn normalize_year(year: Year) -> Year {
    if year < 100 {
        return 2000 + year;
    }

    year
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Group and Event
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The type of events in a group; applies to all events within the group.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    /// Frontal lectures by professors (הרצאה)
    #[default]
    Lecture,
    /// Frontal tutorials by TAs (תרגול, תרגיל)
    Tutorial,
    /// Laboratory experiments (מעבדה)
    Lab,
    /// Sports activities
    Sport,
}

impl fmt::Display for GroupType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        let s = match self {
            GroupType::Lecture => "lecture",
            GroupType::Tutorial => "tutorial",
            GroupType::Lab => "lab",
            GroupType::Sport => "sport",
        };
        write!(f, "{}", s)
    }
}

/// A course's registration group (קבוצת רישום) and the events it entails.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    #[serde(default)]
    pub teachers: Vec<String>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    #[serde(default)]
    pub description: Option<String>,
}

impl Group {
    pub fn new(
        id: GroupId,
        group_type: GroupType,
    ) -> Group {
        Group {
            id,
            group_type,
            ..Default::default()
        }
    }
}

/// Time of day as "minutes since midnight". Displayed as `HH:MM`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinutesSinceMidnight(pub u32);

impl MinutesSinceMidnight {
    pub const fn from_hours_minutes(
        hours: u32,
        minutes: u32,
    ) -> MinutesSinceMidnight {
        MinutesSinceMidnight(hours * 60 + minutes)
    }

    pub const fn hours(&self) -> u32 {
        self.0 / 60
    }

    pub const fn minutes(&self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for MinutesSinceMidnight {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

/// A singular weekly event within a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Exported as a number, `0` is Sunday.
    #[serde(with = "weekday_from_sunday")]
    pub day: Weekday,
    pub location: String,
    pub start_minute: MinutesSinceMidnight,
    pub end_minute: MinutesSinceMidnight,
}

/// (De)serialize a [`Weekday`] as days since Sunday.
///
/// [`Weekday`]: https://docs.rs/chrono/0.4.40/chrono/enum.Weekday.html
mod weekday_from_sunday {
    use ::chrono::Weekday;
    use ::serde::de::Error;
    use ::serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(
        day: &Weekday,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(day.num_days_from_sunday())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = u32::deserialize(deserializer)?;
        match n {
            0 => Ok(Weekday::Sun),
            1 => Ok(Weekday::Mon),
            2 => Ok(Weekday::Tue),
            3 => Ok(Weekday::Wed),
            4 => Ok(Weekday::Thu),
            5 => Ok(Weekday::Fri),
            6 => Ok(Weekday::Sat),
            _ => Err(D::Error::custom(format!("day {} is not within 0..=6", n))),
        }
    }
}
