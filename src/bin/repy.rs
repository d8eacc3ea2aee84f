// src/bin/repy.rs

//! Driver program _repy_ drives the [_repylib_].
//!
//! Reads one REPY, from a file or stdin, optionally extracting it from the
//! published ZIP archive first. Parses it with diagnostics printed to
//! stderr, then writes the [`Catalog`] as JSON.
//!
//! [_repylib_]: repylib
//! [`Catalog`]: repylib::data::catalog::Catalog

#![allow(non_camel_case_types)]

use std::fs::File;
use std::io::{BufWriter, Cursor, Read, Write};
use std::process::ExitCode;

use ::anyhow::{Context, Result};
use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
#[allow(unused_imports)]
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use ::repylib::common::{FPath, REPFILE_URL, REPY_MEMBER_NAME};
use ::repylib::data::catalog::Catalog;
use ::repylib::data::codepage::{recode, Charset};
use ::repylib::debug::printers::e_err;
use ::repylib::printer::logger::ColorLogger;
use ::repylib::printer::printers::{write_stdout, ColorChoice};
use ::repylib::printer::summary::print_summary;
use ::repylib::readers::archive::extract_from_zip;
use ::repylib::readers::repyparser::parse;

/// The value passed for INPUT or OUTPUT to mean stdin or stdout.
const CLI_STDIO: &str = "-";

const CLI_HELP_AFTER: &str = concatcp!(
    "The REPY is published inside the archive at\n",
    "    ", REPFILE_URL, "\n",
    "as member \"", REPY_MEMBER_NAME, "\", encoded in IBM code page 862.\n",
    "Pass the archive itself with --zip.\n",
    "\n",
    "Exits 0 on success, 1 on any failure."
);

/// `--color` choices.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "repy",
    version = concatcp!(
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Repository: ", env!("CARGO_PKG_REPOSITORY"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of the REPY, or of the archive with --zip.
    /// "-" reads from stdin.
    #[clap(
        default_value = CLI_STDIO,
        verbatim_doc_comment,
    )]
    input: String,

    /// Write the JSON catalog to this path. "-" writes to stdout.
    #[clap(
        short = 'o',
        long,
        default_value = CLI_STDIO,
        verbatim_doc_comment,
    )]
    output: String,

    /// INPUT is a ZIP archive holding the REPY.
    #[clap(
        short = 'z',
        long,
        verbatim_doc_comment,
    )]
    zip: bool,

    /// Name of the archive member holding the REPY.
    /// Only used with --zip.
    #[clap(
        long = "zip-member",
        default_value = REPY_MEMBER_NAME,
        requires = "zip",
        verbatim_doc_comment,
    )]
    zip_member: String,

    /// Also write the raw REPY recoded to ISO-8859-8 to this path.
    /// Most text viewers can display that.
    #[clap(
        short = 'm',
        long,
        verbatim_doc_comment,
    )]
    mirror: Option<String>,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Also print informational parse messages, not only warnings.
    #[clap(
        short = 'v',
        long,
        verbatim_doc_comment,
    )]
    verbose: bool,

    /// Print a line per faculty, and totals, to stderr.
    #[clap(
        short,
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

/// Read all of `path`, or of stdin for [`CLI_STDIO`].
fn read_input(path: &FPath) -> Result<Vec<u8>> {
    defn!("({:?})", path);
    let mut buffer: Vec<u8> = Vec::new();
    if path == CLI_STDIO {
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .context("failed to read stdin")?;
    } else {
        File::open(path)
            .with_context(|| format!("failed to open {:?}", path))?
            .read_to_end(&mut buffer)
            .with_context(|| format!("failed to read {:?}", path))?;
    }
    defx!("return {} bytes", buffer.len());

    Ok(buffer)
}

/// Write `catalog` as pretty JSON to `path`, or to stdout for
/// [`CLI_STDIO`].
fn write_output(
    catalog: &Catalog,
    path: &FPath,
) -> Result<()> {
    defn!("({:?})", path);
    if path == CLI_STDIO {
        let mut buffer: Vec<u8> = serde_json::to_vec_pretty(catalog).context("failed to serialize catalog")?;
        buffer.push(b'\n');
        write_stdout(&buffer).context("failed to write stdout")?;
    } else {
        let file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, catalog).context("failed to serialize catalog")?;
        writeln!(writer).with_context(|| format!("failed to write {:?}", path))?;
        writer
            .flush()
            .with_context(|| format!("failed to write {:?}", path))?;
    }
    defx!();

    Ok(())
}

/// Write `repy` recoded from code page 862 to ISO-8859-8 to `path`.
fn write_mirror(
    repy: &[u8],
    path: &FPath,
) -> Result<()> {
    defn!("({:?})", path);
    let mirror: Vec<u8> = recode(Charset::Cp862, Charset::Iso8859_8, repy)
        .context("failed to recode REPY to ISO-8859-8")?;
    std::fs::write(path, mirror).with_context(|| format!("failed to write mirror {:?}", path))?;
    defx!();

    Ok(())
}

fn run(args: CLI_Args) -> Result<()> {
    defn!("{:?}", args);
    let color_choice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };

    let input: Vec<u8> = read_input(&args.input)?;
    let repy: Vec<u8> = if args.zip {
        extract_from_zip(Cursor::new(input), &args.zip_member)
            .with_context(|| format!("failed to extract {:?} from {:?}", args.zip_member, args.input))?
    } else {
        input
    };
    defo!("REPY is {} bytes", repy.len());

    if let Some(mirror) = args.mirror.as_ref() {
        write_mirror(&repy, mirror)?;
    }

    let mut logger = ColorLogger::new(color_choice, args.verbose);
    let catalog: Catalog = parse(&repy, &mut logger).context("failed to parse REPY")?;
    defo!("parsed {} faculties, {} courses", catalog.len(), catalog.course_count());

    write_output(&catalog, &args.output)?;

    if args.summary {
        print_summary(&catalog, color_choice);
    }
    defx!();

    Ok(())
}

/// Process the user-passed command-line arguments, then parse.
/// Determine a process return code.
pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args = CLI_Args::parse();
    let exitcode = match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            e_err!("{:#}", err);
            ExitCode::FAILURE
        }
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
