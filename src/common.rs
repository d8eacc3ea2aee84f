// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;

/// Name of the report file inside the published archive.
pub const REPY_MEMBER_NAME: &str = "REPY";

/// Where the Technion publishes the archive holding the report.
pub const REPFILE_URL: &str = "http://ug.technion.ac.il/rep/REPFILE.zip";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lines and LineSource
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Generic counting
pub type Count = u64;

/// 1-based line number within the report. `0` means "before the first line".
pub type LineNumber = usize;

/// Number of times [`LineSource::advance`] may hit end of input before it
/// gives up with an error.
///
/// [`LineSource::advance`]: crate::readers::linesource::LineSource#method.advance
pub const EOF_HITS_MAX: Count = 10;

/// Carriage return, stripped from line endings.
#[allow(non_upper_case_globals)]
pub const CRc: char = '\r';

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Courses and Groups
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Numeric course identifier, 5 or 6 digits in the report.
pub type CourseId = u32;

/// Numeric registration-group identifier.
pub type GroupId = u32;

/// The first group of a course usually has no explicit id; it gets this one.
pub const GROUP_ID_FIRST: GroupId = 10;

/// Group ids advance in blocks of this size at each group separator.
pub const GROUP_ID_BLOCK: GroupId = 10;

/// Weekly hour count of one kind of activity.
pub type Hours = u32;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Errors from parsing a REPY. Each leaf variant carries the [`LineNumber`]
/// current when it was raised.
#[derive(Debug, thiserror::Error)]
pub enum RepyError {
    /// An expected literal separator line is absent.
    #[error("Line {line}: expected {expected:?}, got {got:?}")]
    StructuralMismatch {
        line: LineNumber,
        expected: String,
        got: String,
    },
    /// A line did not match the pattern of the field it must hold.
    #[error("Line {line}: line {text:?} doesn't match {field} pattern")]
    FieldFormat {
        line: LineNumber,
        field: &'static str,
        text: String,
    },
    /// A weekday letter, group-type word or hours code outside the known
    /// tables. Signals an unsupported report dialect.
    #[error("Line {line}: invalid {kind} {token:?}")]
    UnknownToken {
        line: LineNumber,
        kind: &'static str,
        token: String,
    },
    /// Input ended inside a construct that needs more lines.
    #[error("Line {line}: reached EOF {during}")]
    UnexpectedEof {
        line: LineNumber,
        during: &'static str,
    },
    /// End of input was hit more than [`EOF_HITS_MAX`] times.
    #[error("Line {line}: hit EOF too many times ({hits})")]
    EofExhaustion {
        line: LineNumber,
        hits: Count,
    },
    /// An internal guarantee broke, e.g. a digits-only capture would not
    /// parse as a number.
    #[error("Line {line}: {detail}")]
    InvariantViolation {
        line: LineNumber,
        detail: String,
    },
    /// Reading the report failed.
    #[error("failed to read REPY: {0}")]
    Io(#[from] std::io::Error),
    /// Another `RepyError` within a named parsing scope.
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<RepyError>,
    },
}

impl RepyError {
    /// Wrap `self` with a description of the enclosing scope.
    pub fn context<S: Into<String>>(
        self,
        context: S,
    ) -> RepyError {
        RepyError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through any `Context`.
    pub fn root(&self) -> &RepyError {
        match self {
            RepyError::Context { source, .. } => source.root(),
            _ => self,
        }
    }

    /// May the course loop drop the current course and continue?
    ///
    /// Unknown tokens, EOF exhaustion and invariant violations always abort
    /// the whole parse.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.root(),
            RepyError::StructuralMismatch { .. }
                | RepyError::FieldFormat { .. }
                | RepyError::UnexpectedEof { .. }
        )
    }
}

/// `Result` for parsing functions.
pub type ResultRepy<T> = std::result::Result<T, RepyError>;

/// Add scope context to the `Err` of a [`ResultRepy`].
pub trait ResultRepyExt<T> {
    fn context<S: Into<String>>(
        self,
        context: S,
    ) -> ResultRepy<T>;
}

impl<T> ResultRepyExt<T> for ResultRepy<T> {
    fn context<S: Into<String>>(
        self,
        context: S,
    ) -> ResultRepy<T> {
        self.map_err(|err| err.context(context))
    }
}
