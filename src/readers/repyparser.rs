// src/readers/repyparser.rs

//! Implements a [`RepyParser`], the state machine that drives a
//! [`LineSource`] through a REPY and builds a [`Catalog`].
//!
//! A REPY is a sequence of faculties. An ordinary faculty is
//!
//! ```text
//! FACULTY_SEP, name, semester, FACULTY_SEP, { course }, blank line
//! ```
//!
//! and each course is
//!
//! ```text
//! [COURSE_SEP], id and name, hours and points, COURSE_SEP,
//! { head info }, GROUP_SEP1, GROUP_SEP2, { group row }, COURSE_SEP
//! ```
//!
//! The sports faculty is wider and uses [`SPORTS_FACULTY_SEP`] and
//! [`SPORTS_COURSE_SEP`]. Its per-group details are skipped.
//!
//! [`LineSource`]: crate::readers::linesource::LineSource
//! [`Catalog`]: crate::data::catalog::Catalog
//! [`SPORTS_FACULTY_SEP`]: crate::data::fields::SPORTS_FACULTY_SEP
//! [`SPORTS_COURSE_SEP`]: crate::data::fields::SPORTS_COURSE_SEP

use crate::common::{GroupId, LineNumber, RepyError, ResultRepy, ResultRepyExt, GROUP_ID_BLOCK, GROUP_ID_FIRST};
use crate::data::catalog::{Catalog, Course, Faculty, Group, GroupType};
use crate::data::fields::{
    is_separator_line,
    match_event,
    match_faculty_name,
    match_faculty_semester,
    match_hours_and_points,
    match_id_and_name,
    match_lecturer,
    match_lecturer_in_charge,
    match_sports_semester,
    match_test_date,
    BLANK_LINE1,
    BLANK_LINE2,
    COURSE_SEP,
    FACULTY_SEP,
    GROUP_SEP1,
    GROUP_SEP2,
    SPORTS_COURSE_SEP,
    SPORTS_FACULTY_NAME,
    SPORTS_FACULTY_SEP,
};
use crate::printer::logger::Logger;
use crate::readers::linesource::LineSource;

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{dpfn, dpfo, dpfx, dpfñ};

/// Parse a REPY in code page 862.
///
/// `logger` receives the diagnostics and is flushed once before returning,
/// whether or not parsing succeeded.
pub fn parse(
    data: &[u8],
    logger: &mut dyn Logger,
) -> ResultRepy<Catalog> {
    dpfn!("(data len {})", data.len());
    let result = parse_source(LineSource::from_cp862(data), logger);
    dpfx!("return is_ok {}", result.is_ok());

    result
}

/// Parse an already decoded REPY. See [`parse`].
pub fn parse_str(
    text: &str,
    logger: &mut dyn Logger,
) -> ResultRepy<Catalog> {
    dpfn!("(text len {})", text.len());
    let result = parse_source(LineSource::new(text), logger);
    dpfx!("return is_ok {}", result.is_ok());

    result
}

fn parse_source(
    source: LineSource,
    logger: &mut dyn Logger,
) -> ResultRepy<Catalog> {
    let result = RepyParser::new(source, logger).parse_file();
    logger.flush();

    result
}

/// The parsing context of one in-flight parse.
///
/// `RepyParser` owns its [`LineSource`] and borrows the [`Logger`] for the
/// duration of the parse. The current line of the `LineSource` is the next
/// line to be consumed; every `parse_*` function leaves it on the first
/// line it did not consume.
///
/// [`LineSource`]: crate::readers::linesource::LineSource
/// [`Logger`]: crate::printer::logger::Logger
pub struct RepyParser<'l> {
    source: LineSource,
    /// Id for the next group of the current course that has no explicit id.
    group_id: GroupId,
    logger: &'l mut dyn Logger,
}

impl fmt::Debug for RepyParser<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("RepyParser")
            .field("source", &self.source)
            .field("group_id", &self.group_id)
            .finish()
    }
}

impl<'l> RepyParser<'l> {
    pub fn new(
        source: LineSource,
        logger: &'l mut dyn Logger,
    ) -> RepyParser<'l> {
        RepyParser {
            source,
            group_id: GROUP_ID_FIRST,
            logger,
        }
    }

    /// See [`LineSource::line_number`].
    ///
    /// [`LineSource::line_number`]: crate::readers::linesource::LineSource#method.line_number
    #[inline(always)]
    pub const fn line_number(&self) -> LineNumber {
        self.source.line_number()
    }

    #[inline(always)]
    fn text(&self) -> &str {
        self.source.current_line()
    }

    fn info(
        &mut self,
        msg: &str,
    ) {
        let line = self.source.line_number();
        self.logger
            .info(&format!("Line {}: {}", line, msg));
    }

    fn warn(
        &mut self,
        msg: &str,
    ) {
        let line = self.source.line_number();
        self.logger
            .warn(&format!("Line {}: {}", line, msg));
    }

    /// Move to the next line; `Ok(false)` at end of input.
    pub(crate) fn advance(&mut self) -> ResultRepy<bool> {
        let advanced = self.source.advance()?;
        if !advanced {
            let hits = self.source.eof_hits();
            self.info(&format!("Hit EOF, EOF hits is {}", hits));
        }

        Ok(advanced)
    }

    fn unexpected_eof(
        &self,
        during: &'static str,
    ) -> RepyError {
        RepyError::UnexpectedEof {
            line: self.source.line_number(),
            during,
        }
    }

    fn field_format(
        &self,
        field: &'static str,
    ) -> RepyError {
        RepyError::FieldFormat {
            line: self.source.line_number(),
            field,
            text: self.text().to_string(),
        }
    }

    fn group_id_overflow(&self) -> RepyError {
        RepyError::InvariantViolation {
            line: self.source.line_number(),
            detail: format!("group id overflow after {}", self.group_id),
        }
    }

    /// The current line must be `expected`; consume it.
    fn expect_line_and_advance(
        &mut self,
        expected: &str,
    ) -> ResultRepy<()> {
        if self.text() != expected {
            return Err(RepyError::StructuralMismatch {
                line: self.source.line_number(),
                expected: expected.to_string(),
                got: self.text().to_string(),
            });
        }
        self.advance()?;

        Ok(())
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // catalog and faculties
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Parse every faculty until end of input.
    pub fn parse_file(&mut self) -> ResultRepy<Catalog> {
        dpfn!();
        let mut catalog = Catalog::default();
        while let Some(faculty) = self
            .parse_faculty()
            .context("failed to parse a faculty")?
        {
            dpfo!("parsed {}", faculty);
            catalog.faculties.push(faculty);
        }
        dpfx!("return {} faculties", catalog.len());

        Ok(catalog)
    }

    /// Parse one faculty. `Ok(None)` when only blank lines remain.
    pub fn parse_faculty(&mut self) -> ResultRepy<Option<Faculty>> {
        dpfn!("line {}", self.line_number());
        while self.text().trim().is_empty() {
            if !self.advance()? {
                dpfx!("return None; EOF");
                return Ok(None);
            }
        }

        match self.text() {
            SPORTS_FACULTY_SEP => {
                let faculty = self.parse_sports_faculty()?;
                dpfx!("return {}", faculty);
                return Ok(Some(faculty));
            }
            FACULTY_SEP => {}
            _ => {
                return Err(RepyError::StructuralMismatch {
                    line: self.source.line_number(),
                    expected: FACULTY_SEP.to_string(),
                    got: self.text().to_string(),
                });
            }
        }

        self.expect_line_and_advance(FACULTY_SEP)
            .context("didn't find 1st faculty separator line in faculty")?;

        let name = match match_faculty_name(self.text()) {
            Some(name) => name,
            None => return Err(self.field_format("faculty name")),
        };
        self.advance()?;
        let semester = match match_faculty_semester(self.text()) {
            Some(semester) => semester,
            None => return Err(self.field_format("faculty semester")),
        };
        self.advance()?;

        self.expect_line_and_advance(FACULTY_SEP)
            .context("didn't find 2nd faculty separator line in faculty")?;

        let mut faculty = Faculty {
            name,
            semester,
            courses: Vec::new(),
        };

        loop {
            match self.parse_course() {
                Ok(Some(course)) => {
                    dpfo!("parsed {}", course);
                    faculty.courses.push(course);
                }
                Ok(None) => break,
                Err(err) if err.is_recoverable() => {
                    self.warn(&format!(
                        "failed to parse a course in faculty {}: {}; skipping to next course",
                        faculty.name, err
                    ));
                    while self.text() != COURSE_SEP {
                        if !self.advance()? {
                            break;
                        }
                    }
                }
                Err(err) => {
                    dpfx!("return Err {}", err);
                    return Err(err);
                }
            }
        }
        dpfx!("return {}", faculty);

        Ok(Some(faculty))
    }

    /// Parse the sports faculty. Errors inside it are not recovered.
    fn parse_sports_faculty(&mut self) -> ResultRepy<Faculty> {
        dpfn!("line {}", self.line_number());
        self.info("Started scanning sports faculty");

        self.expect_line_and_advance(SPORTS_FACULTY_SEP)
            .context("didn't find 1st faculty separator line in sports faculty")?;

        let semester = match match_sports_semester(self.text()) {
            Some(semester) => semester,
            None => return Err(self.field_format("sports semester")),
        };
        self.advance()?;

        self.expect_line_and_advance(SPORTS_FACULTY_SEP)
            .context("didn't find 2nd faculty separator line in sports faculty")?;

        let mut faculty = Faculty {
            name: SPORTS_FACULTY_NAME.to_string(),
            semester,
            courses: Vec::new(),
        };
        while let Some(course) = self
            .parse_sports_course()
            .context("failed to parse a sports course")?
        {
            dpfo!("parsed {}", course);
            faculty.courses.push(course);
        }
        dpfx!("return {}", faculty);

        Ok(faculty)
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // courses
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Consume the id-and-name line into `course`.
    fn parse_id_and_name(
        &mut self,
        course: &mut Course,
    ) -> ResultRepy<()> {
        let line = self.source.line_number();
        match match_id_and_name(self.text(), line)? {
            Some((id, name)) => {
                course.id = id;
                course.name = name;
            }
            None => return Err(self.field_format("id and name")),
        }
        self.advance()?;

        Ok(())
    }

    /// Consume the hours-and-points line into `course`.
    ///
    /// A line that does not match is warned about and skipped.
    fn parse_hours_and_points(
        &mut self,
        course: &mut Course,
    ) -> ResultRepy<()> {
        let line = self.source.line_number();
        let err = match match_hours_and_points(self.text(), line) {
            Ok(Some((points, weekly_hours))) => {
                course.academic_points = points;
                course.weekly_hours = match course.weekly_hours.checked_add(weekly_hours) {
                    Some(val) => val,
                    None => {
                        return Err(RepyError::InvariantViolation {
                            line,
                            detail: format!("weekly hours overflow adding {}", weekly_hours),
                        });
                    }
                };
                self.advance()?;
                return Ok(());
            }
            Ok(None) => self.field_format("hours and points"),
            Err(err) if err.is_recoverable() => err,
            Err(err) => return Err(err),
        };
        self.warn(&format!("Invalid hours and points line: {}", err));
        self.advance()?;

        Ok(())
    }

    /// Parse one ordinary course. `Ok(None)` at the end of the faculty.
    pub fn parse_course(&mut self) -> ResultRepy<Option<Course>> {
        dpfn!("line {}", self.line_number());
        let mut course = Course::default();
        self.group_id = GROUP_ID_FIRST;

        while self.text() == COURSE_SEP {
            if !self.advance()? {
                return Err(self.unexpected_eof("while parsing course"));
            }
        }

        if self.text().trim().is_empty() {
            dpfx!("return None; end of faculty");
            return Ok(None);
        }

        self.parse_id_and_name(&mut course)
            .context("failed to parse ID and name in ordinary course")?;
        self.parse_hours_and_points(&mut course)?;
        self.expect_line_and_advance(COURSE_SEP)
            .context("didn't find expected course separator when parsing course")?;
        self.parse_course_head_info(&mut course)
            .context("failed to parse course head info")?;
        self.parse_groups(&mut course)
            .context("failed to parse groups for course")?;
        dpfx!("return course {}", course.id);

        Ok(Some(course))
    }

    /// Parse one sports course, skipping its group details.
    /// `Ok(None)` at the end of the faculty.
    fn parse_sports_course(&mut self) -> ResultRepy<Option<Course>> {
        dpfn!("line {}", self.line_number());
        let mut course = Course::default();
        self.group_id = GROUP_ID_FIRST;

        while self.text() == SPORTS_COURSE_SEP {
            if !self.advance()? {
                break;
            }
        }

        if self.text().trim().is_empty() {
            dpfx!("return None; end of faculty");
            return Ok(None);
        }

        self.parse_id_and_name(&mut course)
            .context("failed to parse ID and name in sports course")?;
        self.parse_hours_and_points(&mut course)?;
        self.expect_line_and_advance(SPORTS_COURSE_SEP)
            .context("didn't find expected course separator when parsing sports course")?;

        // TODO: collect sports groups; rows carry a free-text description
        //       that belongs in `Group::description`
        self.warn(&format!(
            "Skipping sports course group information (not implemented) for {}",
            course.name
        ));
        while self.text() != SPORTS_COURSE_SEP {
            if !self.advance()? {
                return Err(self.unexpected_eof("while skipping sports course groups"));
            }
        }
        dpfx!("return course {}", course.id);

        Ok(Some(course))
    }

    /// Consume head info lines until the group section or a course
    /// separator.
    fn parse_course_head_info(
        &mut self,
        course: &mut Course,
    ) -> ResultRepy<()> {
        loop {
            if self.text() == GROUP_SEP1 || self.text() == COURSE_SEP {
                return Ok(());
            }

            let line = self.source.line_number();
            if is_separator_line(self.text()) {
                // skip
            } else if let Some(date) = match_test_date(self.text(), line)? {
                dpfo!("test date {}", date);
                course.test_dates.push(date);
            } else if let Some(lecturer) = match_lecturer_in_charge(self.text()) {
                course.lecturer_in_charge = Some(lecturer);
            } else {
                let msg = format!("Ignored courseHeadInfo line {:?}", self.text());
                self.info(&msg);
            }

            if !self.advance()? {
                return Err(self.unexpected_eof("while parsing course head info"));
            }
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // groups
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Parse the group section up to and including the closing
    /// [`COURSE_SEP`].
    ///
    /// A course without a group section is kept, with a warning.
    ///
    /// [`COURSE_SEP`]: crate::data::fields::COURSE_SEP
    fn parse_groups(
        &mut self,
        course: &mut Course,
    ) -> ResultRepy<()> {
        dpfn!("line {}", self.line_number());
        if self.text() != GROUP_SEP1 {
            let msg = format!(
                "Expected {:?}, got {:?}; keeping course without groups",
                GROUP_SEP1,
                self.text()
            );
            self.warn(&msg);
            dpfx!("return; no group section");
            return Ok(());
        }

        loop {
            if self.text() == GROUP_SEP1 {
                self.advance()?;
                self.expect_line_and_advance(GROUP_SEP2)
                    .context("didn't find 2nd expected group separator")?;
                if self.group_id > GROUP_ID_FIRST {
                    self.group_id = match (self.group_id / GROUP_ID_BLOCK)
                        .checked_mul(GROUP_ID_BLOCK)
                        .and_then(|id| id.checked_add(GROUP_ID_BLOCK))
                    {
                        Some(id) => id,
                        None => return Err(self.group_id_overflow()),
                    };
                    dpfo!("group_id snapped to {}", self.group_id);
                }
            } else if self.text() == COURSE_SEP {
                self.advance()?;
                dpfx!("return; {} groups", course.groups.len());
                return Ok(());
            } else if self.text() == BLANK_LINE1 || self.text() == BLANK_LINE2 {
                self.advance()?;
            } else if self.parse_event_line(course)? {
                // consumed
            } else if self.parse_lecturer_line(course) {
                self.advance()?;
            } else {
                if self.source.is_eof() {
                    dpfx!("return Err; EOF");
                    return Err(self.unexpected_eof("while parsing groups"));
                }
                let msg = format!("Ignored group line {:?}", self.text());
                self.warn(&msg);
                self.advance()?;
            }
        }
    }

    /// Consume one row of the group table if the current line is one.
    ///
    /// A row with a group type starts a new group; a row without one adds
    /// an event to the most recent group.
    fn parse_event_line(
        &mut self,
        course: &mut Course,
    ) -> ResultRepy<bool> {
        let line = self.source.line_number();
        let event_line = match match_event(self.text(), line)? {
            Some(event_line) => event_line,
            None => return Ok(false),
        };
        dpfo!("{:?}", event_line);

        if let Some(group_type) = event_line.group_type {
            let id: GroupId = match event_line.group_id {
                Some(id) => {
                    self.group_id = id.saturating_add(1);
                    id
                }
                None => {
                    let id = self.group_id;
                    self.group_id = match id.checked_add(1) {
                        Some(next) => next,
                        None => return Err(self.group_id_overflow()),
                    };
                    id
                }
            };
            course
                .groups
                .push(Group::new(id, group_type));
        }

        match course.groups.last_mut() {
            Some(group) => group.events.push(event_line.event),
            None => {
                return Err(RepyError::StructuralMismatch {
                    line,
                    expected: "an event line with a group type".to_string(),
                    got: self.text().to_string(),
                });
            }
        }
        self.advance()?;

        Ok(true)
    }

    /// Add a teacher to the most recent group if the current line is a
    /// lecturer line. Does not advance.
    fn parse_lecturer_line(
        &mut self,
        course: &mut Course,
    ) -> bool {
        let lecturer = match match_lecturer(self.text()) {
            Some(lecturer) => lecturer,
            None => return false,
        };
        if course.groups.is_empty() {
            course
                .groups
                .push(Group::new(0, GroupType::default()));
        }
        if let Some(group) = course.groups.last_mut() {
            group.teachers.push(lecturer);
        }

        true
    }
}
