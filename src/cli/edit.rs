//! Session edits given on the command line.
//!
//! Weeks are addressed by week number, not by position.

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use huddle_schedule::{ScheduleStore, SwapScope};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Swap {
        week_a: u32,
        week_b: u32,
        scope: SwapScope,
    },
    AddHoliday {
        week: u32,
        date: NaiveDate,
        name: String,
    },
    RemoveHoliday {
        week: u32,
        index: usize,
    },
}

impl Edit {
    /// Applies the edit to `store`.
    pub fn apply(&self, store: &mut ScheduleStore) -> anyhow::Result<()> {
        match self {
            Edit::Swap {
                week_a,
                week_b,
                scope,
            } => {
                let a = index_of(store, *week_a)?;
                let b = index_of(store, *week_b)?;
                let report = store.swap(a, b, *scope)?;
                eprintln!("{report}");
            }
            Edit::AddHoliday { week, date, name } => {
                let at = index_of(store, *week)?;
                store.add_holiday(at, name.clone(), *date)?;
            }
            Edit::RemoveHoliday { week, index } => {
                let at = index_of(store, *week)?;
                store.remove_holiday(at, *index)?;
            }
        }
        Ok(())
    }
}

fn index_of(store: &ScheduleStore, week: u32) -> anyhow::Result<usize> {
    store
        .position_of(week)
        .ok_or_else(|| anyhow!("week {week} is not in the roster (1..={})", store.len()))
}

fn parse_week(value: &str) -> anyhow::Result<u32> {
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid week number '{value}'"))
}

impl FromStr for Edit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("expected '<kind>:...', got '{s}'"))?;

        match kind {
            "swap" => {
                let parts: Vec<&str> = rest.split(':').collect();
                let [a, b, scope] = parts.as_slice() else {
                    return Err(anyhow!("expected swap:<weekA>:<weekB>:<scope>, got '{s}'"));
                };
                Ok(Edit::Swap {
                    week_a: parse_week(a)?,
                    week_b: parse_week(b)?,
                    scope: scope.parse().map_err(|e: String| anyhow!(e))?,
                })
            }
            "add-holiday" => {
                let mut parts = rest.splitn(3, ':');
                let (Some(week), Some(date), Some(name)) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err(anyhow!("expected add-holiday:<week>:<YYYY-MM-DD>:<name>, got '{s}'"));
                };
                let name = name.trim();
                if name.is_empty() {
                    return Err(anyhow!("holiday name must not be empty"));
                }
                Ok(Edit::AddHoliday {
                    week: parse_week(week)?,
                    date: date
                        .trim()
                        .parse()
                        .with_context(|| format!("invalid date '{date}'"))?,
                    name: name.to_string(),
                })
            }
            "remove-holiday" => {
                let (week, index) = rest
                    .split_once(':')
                    .ok_or_else(|| anyhow!("expected remove-holiday:<week>:<index>, got '{s}'"))?;
                Ok(Edit::RemoveHoliday {
                    week: parse_week(week)?,
                    index: index
                        .trim()
                        .parse()
                        .with_context(|| format!("invalid holiday index '{index}'"))?,
                })
            }
            other => Err(anyhow!(
                "unknown edit '{other}' (expected swap, add-holiday or remove-holiday)"
            )),
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Swap {
                week_a,
                week_b,
                scope,
            } => write!(f, "swap:{week_a}:{week_b}:{scope}"),
            Edit::AddHoliday { week, date, name } => write!(f, "add-holiday:{week}:{date}:{name}"),
            Edit::RemoveHoliday { week, index } => write!(f, "remove-holiday:{week}:{index}"),
        }
    }
}
