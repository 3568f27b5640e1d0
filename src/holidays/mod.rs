mod parser;
pub(crate) use self::parser::{parse_lines, Line, LineError};
use crate::dates::triple;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::Date;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub(crate) struct HolidayRule {
    // Values are kept as written; out-of-range ones never match a real date.
    pub(crate) day: i64,
    pub(crate) month: i64,
    /// `None` for rules written as `DD.MM`
    pub(crate) year: Option<i64>,
    pub(crate) recurring: bool,
}

impl HolidayRule {
    // A recurring rule matches every year even if it was written with one.
    pub(crate) fn matches(&self, day: u32, month: u32, year: i32) -> bool {
        self.month == i64::from(month)
            && self.day == i64::from(day)
            && (self.recurring || self.year == Some(i64::from(year)))
    }
}

/// The set of holiday rules loaded at startup, indexed by month & day
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HolidayStore {
    rules: BTreeMap<(i64, i64), BTreeSet<HolidayRule>>,
}

impl HolidayStore {
    pub(crate) fn new() -> HolidayStore {
        HolidayStore::default()
    }

    /// Parse the contents of a holiday file, returning the rules from every
    /// valid line together with the errors from every invalid one
    pub(crate) fn parse(source: &str) -> (HolidayStore, Vec<LineError>) {
        let mut store = HolidayStore::new();
        let mut errors = Vec::new();
        for outcome in parse_lines(source) {
            match outcome {
                Ok((_, Line::Rule(rule))) => store.insert(rule),
                Ok(_) => (),
                Err(e) => errors.push(e),
            }
        }
        (store, errors)
    }

    /// Read & parse the holiday file at `path`.  If the file cannot be read,
    /// the store is empty and the returned errors consist solely of the read
    /// failure.
    pub(crate) fn load<P: AsRef<Path>>(path: P) -> (HolidayStore, Vec<LoadError>) {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(source) => {
                let (store, errors) = HolidayStore::parse(&source);
                let errors = errors.into_iter().map(LoadError::Line).collect();
                (store, errors)
            }
            Err(source) => (
                HolidayStore::new(),
                vec![LoadError::Read {
                    path: path.to_owned(),
                    source,
                }],
            ),
        }
    }

    fn insert(&mut self, rule: HolidayRule) {
        self.rules
            .entry((rule.month, rule.day))
            .or_default()
            .insert(rule);
    }

    pub(crate) fn len(&self) -> usize {
        self.rules.values().map(BTreeSet::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn is_holiday(&self, day: u32, month: u32, year: i32) -> bool {
        self.rules
            .get(&(i64::from(month), i64::from(day)))
            .is_some_and(|rules| rules.iter().any(|r| r.matches(day, month, year)))
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        let (day, month, year) = triple(date);
        self.is_holiday(day, month, year)
    }
}

impl FromIterator<HolidayRule> for HolidayStore {
    fn from_iter<I: IntoIterator<Item = HolidayRule>>(iter: I) -> HolidayStore {
        let mut store = HolidayStore::new();
        for rule in iter {
            store.insert(rule);
        }
        store
    }
}

#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("failed to read holidays file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Line(LineError),
}
