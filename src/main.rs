mod app;
mod calendar;
mod dates;
mod holidays;
mod jumpto;
mod popup;
mod theme;
use crate::app::App;
use crate::calendar::{Highlighter, MonthPager};
use crate::holidays::{parse_lines, HolidayStore, Line};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::{Path, PathBuf};
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static DMY_FMT: &[FormatItem<'_>] =
    format_description!("[day padding:none].[month padding:none].[year]");

const DEFAULT_HOLIDAYS_PATH: &str = "assets/holidays.txt";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run { holidays: PathBuf, date: Option<Date> },
    Check { holidays: PathBuf },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut holidays = None;
        let mut check = false;
        let mut date = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("check") => check = true,
                Arg::Short('f') | Arg::Long("holidays") => {
                    holidays = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &DMY_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        let holidays = holidays.unwrap_or_else(|| PathBuf::from(DEFAULT_HOLIDAYS_PATH));
        if check {
            if date.is_some() {
                return Err(lexopt::Error::from("--check does not take a date"));
            }
            Ok(Command::Check { holidays })
        } else {
            Ok(Command::Run { holidays, date })
        }
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { holidays, date } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let (store, errors) = HolidayStore::load(&holidays);
                let mut pager = MonthPager::new(today, Highlighter::new(today, store));
                if let Some(date) = date {
                    pager = pager.start_date(date);
                }
                let app = App::new(pager).with_notices(errors.iter().map(ToString::to_string));
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    app.run(terminal)?;
                    Ok(())
                })
            }
            Command::Check { holidays } => check(&holidays),
            Command::Help => {
                println!("Usage: koledar [-f FILE] [DD.MM.YYYY]");
                println!("       koledar --check [-f FILE]");
                println!();
                println!("Terminal month calendar highlighting Sundays and holidays");
                println!();
                println!("Options:");
                println!("  -f, --holidays FILE");
                println!("                    Read holidays from FILE [default: {DEFAULT_HOLIDAYS_PATH}]");
                println!("  -c, --check       Validate the holidays file and exit");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Report every problem in a holidays file, including the malformed lines
/// that are skipped without complaint when the calendar loads the file
fn check(path: &Path) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read holidays file {}", path.display()))?;
    let mut rules = Vec::new();
    let mut failures = 0usize;
    for outcome in parse_lines(&source) {
        match outcome {
            Ok((_, Line::Rule(rule))) => rules.push(rule),
            Ok((line_no, Line::Ignored(reason))) => {
                eprintln!("{}:{line_no}: note: line ignored: {reason}", path.display());
            }
            Ok(_) => (),
            Err(e) => {
                eprintln!(
                    "{}:{}: error: {}: {}",
                    path.display(),
                    e.line_no,
                    e.text,
                    e.source
                );
                failures += 1;
            }
        }
    }
    let store = rules.into_iter().collect::<HolidayStore>();
    if store.is_empty() {
        eprintln!("{}: warning: no holiday rules defined", path.display());
    }
    println!("{} holiday rule(s) loaded", store.len());
    if failures > 0 {
        anyhow::bail!("{failures} line(s) failed to parse");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
