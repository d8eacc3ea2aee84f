// src/tests/common.rs

//! Report fragments and expected values shared by tests.
//!
//! Lines are in the report's _visual order_, as found in a REPY.

#![allow(dead_code)]

use crate::data::catalog::{Course, Date, Event, Group, GroupType, MinutesSinceMidnight, WeeklyHours};
use crate::data::fields::{
    BLANK_LINE1,
    COURSE_SEP,
    FACULTY_SEP,
    GROUP_SEP1,
    GROUP_SEP2,
    SPORTS_COURSE_SEP,
    SPORTS_FACULTY_SEP,
};

use ::chrono::Weekday;
use ::const_format::concatcp;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// single lines
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const LINE_FACULTY_NAME: &str = "|          למשח תסדנה - תועש תכרעמ          |";
pub const LINE_FACULTY_SEMESTER: &str = "|             ה\"פשת ףרוח רטסמס             |";

pub const LINE_ID_AND_NAME: &str = "|               למשח תסדנהל אובמ 044101 |";
pub const LINE_HOURS_AND_POINTS: &str = "|   3.0 :קנ  2-ת 3-ה:עובשב הארוה תועש     |";
pub const LINE_TEST_DATE_A: &str = "|        14/01/25 'ב םוי :א דעומ          |";
pub const LINE_TEST_DATE_B: &str = "|        11/02/25 'ג םוי :ב דעומ          |";
pub const LINE_LECTURER_IN_CHARGE: &str = "|       ןהכ השמ 'פורפ : יארחא הרומ        |";
pub const LINE_HEAD_SEPARATOR: &str = "|                    -----                 |";

pub const LINE_EVENT_LECTURE: &str = "|     ןמלוא 501  10.30-12.30'א :האצרה      |";
pub const LINE_LECTURER_LECTURE: &str = "|          ןהכ השמ 'פורפ : הצרמ           |";
pub const LINE_EVENT_TUTORIAL_11: &str = "|     בואט 009  14.30-16.30'ב :ליגרת 11   |";
pub const LINE_LECTURER_TUTORIAL: &str = "|              ןולא   יבא : לגרתמ          |";
pub const LINE_EVENT_NO_TYPE: &str = "|     בואט 009  10.30-11.30'ד              |";
pub const LINE_EVENT_TUTORIAL: &str = "|     בואט 009  16.30-18.30'ג :ליגרת       |";
pub const LINE_EVENT_LAB: &str = "|     רלטוב 120  08.30-11.30'ה :הדבעמ      |";

pub const LINE_JUNK: &str = "|                  תורעה                   |";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// report fragments
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Faculty head; the next line is the first course.
pub const FACULTY_HEAD: &str = concatcp!(
    FACULTY_SEP, "\n",
    LINE_FACULTY_NAME, "\n",
    LINE_FACULTY_SEMESTER, "\n",
    FACULTY_SEP, "\n",
);

/// One course with two test dates, one lecture group and two tutorial
/// groups, including its closing [`COURSE_SEP`].
pub const COURSE_44101: &str = concatcp!(
    COURSE_SEP, "\n",
    LINE_ID_AND_NAME, "\n",
    LINE_HOURS_AND_POINTS, "\n",
    COURSE_SEP, "\n",
    LINE_TEST_DATE_A, "\n",
    LINE_HEAD_SEPARATOR, "\n",
    LINE_TEST_DATE_B, "\n",
    LINE_LECTURER_IN_CHARGE, "\n",
    GROUP_SEP1, "\n",
    GROUP_SEP2, "\n",
    LINE_EVENT_LECTURE, "\n",
    LINE_LECTURER_LECTURE, "\n",
    BLANK_LINE1, "\n",
    LINE_EVENT_TUTORIAL_11, "\n",
    LINE_LECTURER_TUTORIAL, "\n",
    LINE_EVENT_NO_TYPE, "\n",
    BLANK_LINE1, "\n",
    LINE_EVENT_TUTORIAL, "\n",
    COURSE_SEP, "\n",
);

/// A course whose id and hours lines are not closed by a [`COURSE_SEP`];
/// the test date line follows the hours line directly. The parser must
/// drop this course and resume at the next one.
pub const COURSE_MALFORMED: &str = concatcp!(
    "|                  הקיסיפ 114051 |\n",
    "|   3.5 :קנ  1-ת 3-ה:עובשב הארוה תועש     |\n",
    LINE_TEST_DATE_A, "\n",
    GROUP_SEP1, "\n",
    GROUP_SEP2, "\n",
    LINE_EVENT_LECTURE, "\n",
    COURSE_SEP, "\n",
);

/// A course with one lecture group, then a second group section with a
/// lab group. Starts without a [`COURSE_SEP`].
pub const COURSE_234114: &str = concatcp!(
    "|                 בשחמל אובמ 234114 |\n",
    "|   4.0 :קנ  2-ת 3-ה:עובשב הארוה תועש     |\n",
    COURSE_SEP, "\n",
    GROUP_SEP1, "\n",
    GROUP_SEP2, "\n",
    LINE_EVENT_LECTURE, "\n",
    GROUP_SEP1, "\n",
    GROUP_SEP2, "\n",
    LINE_EVENT_LAB, "\n",
    COURSE_SEP, "\n",
);

/// An ordinary faculty holding only [`COURSE_44101`].
pub const FACULTY_ONE_COURSE: &str = concatcp!(FACULTY_HEAD, COURSE_44101, "\n");

/// Good course, malformed course, good course.
pub const FACULTY_WITH_MALFORMED: &str = concatcp!(
    FACULTY_HEAD,
    COURSE_44101,
    COURSE_MALFORMED,
    COURSE_234114,
    "\n",
);

/// The sports faculty with two courses.
pub const FACULTY_SPORTS: &str = concatcp!(
    SPORTS_FACULTY_SEP, "\n",
    "|              ה\"פשת ףרוח רטסמס - טרופס תועוצקמ                 |\n",
    SPORTS_FACULTY_SEP, "\n",
    "|                                     לגרודכ 394800              |\n",
    "|             1.0 :קנ  2-ת:עובשב הארוה תועש                       |\n",
    SPORTS_COURSE_SEP, "\n",
    "|    'א הצובק            10.30-12.30'א             ןוקסמ          |\n",
    SPORTS_COURSE_SEP, "\n",
    "|                                      הייחש 394902              |\n",
    "|             1.0 :קנ  2-ת:עובשב הארוה תועש                       |\n",
    SPORTS_COURSE_SEP, "\n",
    "|    'א הצובק            14.30-16.30'ב             הכירב          |\n",
    SPORTS_COURSE_SEP, "\n",
    "\n",
);

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// expected values
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const FACULTY_NAME: &str = "הנדסת חשמל";
pub const FACULTY_SEMESTER: &str = "חורף תשפ\"ה";

pub fn event(
    day: Weekday,
    location: &str,
    start: (u32, u32),
    end: (u32, u32),
) -> Event {
    Event {
        day,
        location: location.to_string(),
        start_minute: MinutesSinceMidnight::from_hours_minutes(start.0, start.1),
        end_minute: MinutesSinceMidnight::from_hours_minutes(end.0, end.1),
    }
}

pub fn group(
    id: u32,
    group_type: GroupType,
    teachers: &[&str],
    events: Vec<Event>,
) -> Group {
    Group {
        id,
        teachers: teachers.iter().map(|s| s.to_string()).collect(),
        events,
        group_type,
        description: None,
    }
}

/// The `Course` of [`COURSE_44101`].
pub fn course_44101() -> Course {
    Course {
        id: 44101,
        name: "מבוא להנדסת חשמל".to_string(),
        academic_points: 3.0,
        lecturer_in_charge: Some("פרופ' משה כהן".to_string()),
        weekly_hours: WeeklyHours {
            lecture: 3,
            tutorial: 2,
            lab: 0,
            project: 0,
        },
        test_dates: vec![Date::new(2025, 1, 14), Date::new(2025, 2, 11)],
        groups: vec![
            group(
                10,
                GroupType::Lecture,
                &["פרופ' משה כהן"],
                vec![event(Weekday::Sun, "אולמן 501", (10, 30), (12, 30))],
            ),
            group(
                11,
                GroupType::Tutorial,
                &["אבי אלון"],
                vec![
                    event(Weekday::Mon, "טאוב 9", (14, 30), (16, 30)),
                    event(Weekday::Wed, "טאוב 9", (10, 30), (11, 30)),
                ],
            ),
            group(
                12,
                GroupType::Tutorial,
                &[],
                vec![event(Weekday::Tue, "טאוב 9", (16, 30), (18, 30))],
            ),
        ],
    }
}
