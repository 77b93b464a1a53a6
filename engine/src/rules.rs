use crate::flag::Flag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::num::ParseIntError;
use std::path::Path;

// Settings
pub const MIN_CELL: u8 = 2;
pub const MAX_CELL: u8 = 255;
pub const MIN_RANGE: usize = 1;
pub const MAX_RANGE: usize = 255;

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("could not read rules file: {0}")]
    Io(#[from] std::io::Error),
    #[error("rules file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown neighbourhood: {0:?}")]
    UnknownNeighbourhood(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbourhood {
    Moore,
    VonNeumann,
}

impl Neighbourhood {
    /// Parses the single-letter notation used in rule strings.
    pub fn from_notation(notation: &str) -> Result<Self, RulesError> {
        match notation {
            "M" => Ok(Self::Moore),
            "N" => Ok(Self::VonNeumann),
            _ => Err(RulesError::UnknownNeighbourhood(notation.to_string())),
        }
    }
}

impl Display for Neighbourhood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Neighbourhood::Moore => write!(f, "Moore"),
            Neighbourhood::VonNeumann => write!(f, "VonNeumann"),
        }
    }
}

/// Inclusive interval of neighbour counts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: u16,
    pub end: u16,
}

impl Range {
    pub fn contains(&self, count: u32) -> bool {
        u32::from(self.start) <= count && count <= u32::from(self.end)
    }

    /// Accepts either `a-b` or a single `a` meaning `a-a`.
    fn from_notation(notation: &str) -> Result<Self, ParseIntError> {
        match notation.split_once('-') {
            Some((start, end)) => Ok(Range {
                start: start.parse()?,
                end: end.parse()?,
            }),
            None => {
                let value = notation.parse()?;
                Ok(Range {
                    start: value,
                    end: value,
                })
            }
        }
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleFlags {
    pub default_cell: bool,
    pub default_range: bool,
    pub default_survival: bool,
    pub default_birth: bool,
    pub default_neighbourhood: bool,
    pub file_load_incorrect: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Number of cell states; live cells are in state `cell - 1`.
    pub cell: u8,
    pub range: usize,
    pub survival: Range,
    pub birth: Range,
    pub neighbourhood: Neighbourhood,
    #[serde(skip)]
    pub flags: RuleFlags,
}

impl Default for Rules {
    fn default() -> Rules {
        Rules {
            cell: 2,
            range: 1,
            survival: Range { start: 2, end: 3 },
            birth: Range { start: 3, end: 3 },
            neighbourhood: Neighbourhood::Moore,
            flags: RuleFlags::default(),
        }
    }
}

fn clamp_flagged<T: PartialOrd>(value: T, lower: T, upper: T, flag: &mut bool) -> T {
    if value < lower {
        *flag = true;
        lower
    } else if value > upper {
        *flag = true;
        upper
    } else {
        value
    }
}

impl Rules {
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::DefaultCell => self.flags.default_cell,
            Flag::DefaultRange => self.flags.default_range,
            Flag::DefaultSurvival => self.flags.default_survival,
            Flag::DefaultBirth => self.flags.default_birth,
            Flag::DefaultNeighbourhood => self.flags.default_neighbourhood,
            Flag::RulesFileLoadIncorrect => self.flags.file_load_incorrect,
            Flag::BoardFileLoadIncorrect => false,
        }
    }

    /// Parses `C:2;R:1;S:2-3;B:3;N:M` style input. Every missing or malformed
    /// entry falls back to its default and raises the matching flag; an empty
    /// string yields the defaults without any flag.
    pub fn parse(input: &str) -> Rules {
        let defaults = Rules::default();
        if input.is_empty() {
            return defaults;
        }

        let values: HashMap<&str, &str> = input
            .split(';')
            .map(|entry| entry.split_once(':').unwrap_or(("", "")))
            .collect();
        let get = |key: &str| -> &str { values.get(key).copied().unwrap_or("") };

        let mut flags = RuleFlags::default();

        let cell = get("C").parse::<u8>().unwrap_or_else(|_| {
            flags.default_cell = true;
            defaults.cell
        });
        let cell = clamp_flagged(cell, MIN_CELL, MAX_CELL, &mut flags.default_cell);

        let range = get("R").parse::<usize>().unwrap_or_else(|_| {
            flags.default_range = true;
            defaults.range
        });
        let range = clamp_flagged(range, MIN_RANGE, MAX_RANGE, &mut flags.default_range);

        let survival = Range::from_notation(get("S")).unwrap_or_else(|_| {
            flags.default_survival = true;
            defaults.survival
        });
        let birth = Range::from_notation(get("B")).unwrap_or_else(|_| {
            flags.default_birth = true;
            defaults.birth
        });
        let neighbourhood = Neighbourhood::from_notation(get("N")).unwrap_or_else(|_| {
            flags.default_neighbourhood = true;
            defaults.neighbourhood
        });

        Rules {
            cell,
            range,
            survival,
            birth,
            neighbourhood,
            flags,
        }
    }

    /// Reads a JSON rules file. Cell and range are clamped into their
    /// bounds the same way [`Rules::parse`] clamps them.
    pub fn load(path: impl AsRef<Path>) -> Result<Rules, RulesError> {
        let json = fs::read_to_string(path)?;
        let rules: Rules = serde_json::from_str(&json)?;
        Ok(rules.clamped())
    }

    fn clamped(mut self) -> Rules {
        self.cell = clamp_flagged(self.cell, MIN_CELL, MAX_CELL, &mut self.flags.default_cell);
        self.range = clamp_flagged(self.range, MIN_RANGE, MAX_RANGE, &mut self.flags.default_range);
        self
    }

    /// Reads a JSON rules file, falling back to the defaults with
    /// [`Flag::RulesFileLoadIncorrect`] raised when it cannot be used.
    pub fn from_file(path: impl AsRef<Path>) -> Rules {
        let path = path.as_ref();
        Rules::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "falling back to default rules");
            Rules {
                flags: RuleFlags {
                    file_load_incorrect: true,
                    ..Default::default()
                },
                ..Default::default()
            }
        })
    }
}
