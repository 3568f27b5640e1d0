//! Parsing of holiday definition files.
//!
//! Each non-blank, non-comment line has the form `DD.MM|FLAG` or
//! `DD.MM.YYYY|FLAG`, optionally followed by a `#` comment.  A `FLAG` of `Y`
//! (in any case) marks the rule as recurring every year.
//!
//! Lines with the wrong number of `|`-separated fields or `.`-separated date
//! components are not errors; they are reported as [`Line::Ignored`] and the
//! store drops them without comment.
use super::HolidayRule;
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// What a single line of a holiday file turned out to be
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Line {
    Blank,
    Comment,
    Rule(HolidayRule),
    Ignored(Ignored),
}

/// Reason a malformed line was skipped
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ignored {
    /// The line did not consist of exactly two `|`-separated fields
    FieldCount(usize),
    /// The date did not consist of two or three `.`-separated components
    DateComponents(usize),
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignored::FieldCount(n) => {
                write!(f, "expected 2 '|'-separated fields, found {n}")
            }
            Ignored::DateComponents(n) => {
                write!(f, "expected DD.MM or DD.MM.YYYY, found {n} date components")
            }
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid {component} {value:?}: {source}")]
pub(crate) struct RuleError {
    component: &'static str,
    value: String,
    source: ParseIntError,
}

/// A line that failed to parse, along with where it was
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("line {line_no}: {text}: {source}")]
pub(crate) struct LineError {
    pub(crate) line_no: usize,
    pub(crate) text: String,
    pub(crate) source: RuleError,
}

pub(crate) fn parse_line(line: &str) -> Result<Line, RuleError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Line::Blank);
    } else if line.starts_with('#') {
        return Ok(Line::Comment);
    }
    let content = line.split_once('#').map_or(line, |(pre, _)| pre);
    let fields = content.trim().split('|').collect::<Vec<_>>();
    let [date_part, flag_part] = fields[..] else {
        return Ok(Line::Ignored(Ignored::FieldCount(fields.len())));
    };
    let recurring = flag_part.trim().eq_ignore_ascii_case("Y");
    let components = date_part.trim().split('.').collect::<Vec<_>>();
    let (day, month, year) = match components[..] {
        [day, month] => (day, month, None),
        [day, month, year] => (day, month, Some(year)),
        _ => {
            return Ok(Line::Ignored(Ignored::DateComponents(components.len())));
        }
    };
    Ok(Line::Rule(HolidayRule {
        day: parse_component("day", day)?,
        month: parse_component("month", month)?,
        year: year.map(|y| parse_component("year", y)).transpose()?,
        recurring,
    }))
}

fn parse_component<T>(component: &'static str, value: &str) -> Result<T, RuleError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    let value = value.trim();
    value.parse::<T>().map_err(|source| RuleError {
        component,
        value: value.to_owned(),
        source,
    })
}

/// Parse every line of `source`, yielding each line's number (starting from
/// 1) with its outcome.  Parsing never stops early.
pub(crate) fn parse_lines(
    source: &str,
) -> impl Iterator<Item = Result<(usize, Line), LineError>> + '_ {
    std::iter::zip(1.., source.lines()).map(|(line_no, text)| {
        parse_line(text)
            .map(|ln| (line_no, ln))
            .map_err(|source| LineError {
                line_no,
                text: text.trim().to_owned(),
                source,
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(day: i64, month: i64, year: Option<i64>, recurring: bool) -> Line {
        Line::Rule(HolidayRule {
            day,
            month,
            year,
            recurring,
        })
    }

    #[test]
    fn test_blank_and_comment() {
        assert_eq!(parse_line(""), Ok(Line::Blank));
        assert_eq!(parse_line("   \t "), Ok(Line::Blank));
        assert_eq!(parse_line("# 01.01|Y"), Ok(Line::Comment));
        assert_eq!(parse_line("   # indented"), Ok(Line::Comment));
    }

    #[test]
    fn test_recurring() {
        assert_eq!(parse_line("01.01|Y"), Ok(rule(1, 1, None, true)));
        assert_eq!(parse_line("01.01|y"), Ok(rule(1, 1, None, true)));
        assert_eq!(parse_line(" 01.01 | Y "), Ok(rule(1, 1, None, true)));
    }

    #[test]
    fn test_one_time() {
        assert_eq!(parse_line("08.02.2024|N"), Ok(rule(8, 2, Some(2024), false)));
        assert_eq!(parse_line("08.02.2024|n"), Ok(rule(8, 2, Some(2024), false)));
    }

    #[test]
    fn test_unknown_flag_is_not_recurring() {
        assert_eq!(parse_line("08.02|yes"), Ok(rule(8, 2, None, false)));
        assert_eq!(parse_line("08.02|"), Ok(rule(8, 2, None, false)));
        assert_eq!(parse_line("08.02|X"), Ok(rule(8, 2, None, false)));
    }

    #[test]
    fn test_dated_and_recurring() {
        assert_eq!(parse_line("25.06.1991|Y"), Ok(rule(25, 6, Some(1991), true)));
    }

    #[test]
    fn test_trailing_comment() {
        assert_eq!(parse_line("25.12|Y # Christmas"), parse_line("25.12|Y"));
        assert_eq!(parse_line("25.12|Y # Christmas"), Ok(rule(25, 12, None, true)));
        assert_eq!(parse_line("25.12|Y#no space"), Ok(rule(25, 12, None, true)));
        assert_eq!(
            parse_line("26.12|Y # a | b"),
            Ok(rule(26, 12, None, true)),
            "pipes inside comments must not count as fields"
        );
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(
            parse_line("01.01"),
            Ok(Line::Ignored(Ignored::FieldCount(1)))
        );
        assert_eq!(
            parse_line("01.01|Y|N"),
            Ok(Line::Ignored(Ignored::FieldCount(3)))
        );
    }

    #[test]
    fn test_wrong_date_component_count() {
        assert_eq!(
            parse_line("01|Y"),
            Ok(Line::Ignored(Ignored::DateComponents(1)))
        );
        assert_eq!(
            parse_line("01.01.2024.5|Y"),
            Ok(Line::Ignored(Ignored::DateComponents(4)))
        );
    }

    #[test]
    fn test_bad_number() {
        let e = parse_line("3x.12|Y").unwrap_err();
        assert_eq!(e.component, "day");
        assert_eq!(e.value, "3x");
        let e = parse_line("01.01.24a|N").unwrap_err();
        assert_eq!(e.component, "year");
        let e = parse_line("01..2024|N").unwrap_err();
        assert_eq!(e.component, "month");
        assert_eq!(e.value, "");
    }

    #[test]
    fn test_negative_values_pass_through() {
        assert_eq!(parse_line("-1.01|Y"), Ok(rule(-1, 1, None, true)));
        assert_eq!(parse_line("01.-3|Y"), Ok(rule(1, -3, None, true)));
        assert_eq!(parse_line("01.01.-5|N"), Ok(rule(1, 1, Some(-5), false)));
    }

    #[test]
    fn test_oversized_year_passes_through() {
        assert_eq!(
            parse_line("01.01.99999999999|N"),
            Ok(rule(1, 1, Some(99_999_999_999), false))
        );
        let e = parse_line("01.01.99999999999999999999|N").unwrap_err();
        assert_eq!(e.component, "year");
    }

    #[test]
    fn test_ranges_not_validated() {
        assert_eq!(parse_line("31.02|Y"), Ok(rule(31, 2, None, true)));
        assert_eq!(parse_line("45.13|Y"), Ok(rule(45, 13, None, true)));
    }

    #[test]
    fn test_rule_error_display() {
        let e = parse_line("3x.12|Y").unwrap_err();
        assert_eq!(
            e.to_string(),
            "invalid day \"3x\": invalid digit found in string"
        );
    }

    #[test]
    fn test_parse_lines_continues_after_error() {
        let source = "# header\n01.01|Y\nxx.01|Y\n\n02.01|Y\r\n01.01\n";
        let outcomes = parse_lines(source).collect::<Vec<_>>();
        assert_eq!(outcomes.len(), 6);
        assert_eq!(outcomes[0], Ok((1, Line::Comment)));
        assert_eq!(outcomes[1], Ok((2, rule(1, 1, None, true))));
        let e = outcomes[2].clone().unwrap_err();
        assert_eq!(e.line_no, 3);
        assert_eq!(e.text, "xx.01|Y");
        assert_eq!(
            e.to_string(),
            "line 3: xx.01|Y: invalid day \"xx\": invalid digit found in string"
        );
        assert_eq!(outcomes[3], Ok((4, Line::Blank)));
        assert_eq!(outcomes[4], Ok((5, rule(2, 1, None, true))));
        assert_eq!(
            outcomes[5],
            Ok((6, Line::Ignored(Ignored::FieldCount(1))))
        );
    }

    #[test]
    fn test_ignored_display() {
        assert_eq!(
            Ignored::FieldCount(3).to_string(),
            "expected 2 '|'-separated fields, found 3"
        );
        assert_eq!(
            Ignored::DateComponents(1).to_string(),
            "expected DD.MM or DD.MM.YYYY, found 1 date components"
        );
    }
}
