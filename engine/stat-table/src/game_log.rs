//! Player game logs
//!
//! A game log arrives as rows of strings where the first row is the header.
//! Every record must have exactly as many cells as the header; a ragged row
//! means the collaborator handed us a malformed table and construction fails.

use crate::error::StatTableError;
use crate::selector::StatSelector;
use crate::types::MissingComponent;
use crate::{DATE_COLUMN, DATE_FORMAT, OPPONENT_COLUMN, TEAM_COLUMN};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One game in a player's log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 1-based row number in the source table (the header is row 0)
    pub row: usize,
    /// Cell values, in header order
    pub fields: Vec<String>,
}

/// A player's game log: header plus one record per game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct GameLog {
    header: Vec<String>,
    records: Vec<GameRecord>,
}

/// Numeric values of one statistic, most recent game first
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatSeries {
    pub values: Vec<f64>,
    /// Games where a combined statistic lacked one or more components
    pub missing: Vec<MissingComponent>,
    /// Index into `values` of each `missing` entry
    #[serde(skip)]
    missing_at: Vec<usize>,
}

impl StatSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The `count` most recent games, with their missing-component warnings
    pub fn most_recent(&self, count: usize) -> StatSeries {
        let count = count.min(self.values.len());
        let (missing, missing_at): (Vec<_>, Vec<_>) = self
            .missing
            .iter()
            .zip(&self.missing_at)
            .filter(|(_, &at)| at < count)
            .map(|(warning, &at)| (warning.clone(), at))
            .unzip();

        StatSeries { values: self.values[..count].to_vec(), missing, missing_at }
    }
}

impl GameLog {
    /// Build a game log from raw rows; `rows[0]` is the header
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Result<Self, StatTableError> {
        if rows.is_empty() {
            return Err(StatTableError::MissingHeader);
        }
        let header = rows.remove(0);
        Self::new(header, rows)
    }

    /// Build a game log from a header and its records
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, StatTableError> {
        let header: Vec<String> = header.into_iter().map(|h| h.trim().to_string()).collect();
        if header.is_empty() {
            return Err(StatTableError::MissingHeader);
        }

        for required in [DATE_COLUMN, TEAM_COLUMN, OPPONENT_COLUMN] {
            if find_column(&header, required).is_none() {
                return Err(StatTableError::MissingColumn(required.to_string()));
            }
        }

        let mut records = Vec::with_capacity(rows.len());
        for (i, fields) in rows.into_iter().enumerate() {
            let row = i + 1;
            if fields.len() != header.len() {
                return Err(StatTableError::RaggedRow {
                    row,
                    expected: header.len(),
                    found: fields.len(),
                });
            }
            records.push(GameRecord { row, fields });
        }

        Ok(Self { header, records })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Records in source order
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    /// Number of games (the header is not counted)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of a column, matched case-insensitively
    pub fn column_index(&self, name: &str) -> Result<usize, StatTableError> {
        find_column(&self.header, name).ok_or_else(|| StatTableError::NoSuchColumn(name.to_string()))
    }

    /// Whether the header contains a column
    pub fn has_column(&self, name: &str) -> bool {
        find_column(&self.header, name).is_some()
    }

    /// Cell value of a record by column name
    pub fn value<'a>(&self, record: &'a GameRecord, column: &str) -> Result<&'a str, StatTableError> {
        let index = self.column_index(column)?;
        Ok(record.fields[index].as_str())
    }

    /// Parsed game date of a record
    pub fn date(&self, record: &GameRecord) -> Result<NaiveDate, StatTableError> {
        let raw = self.value(record, DATE_COLUMN)?;
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map_err(|_| StatTableError::InvalidDate { row: record.row, value: raw.to_string() })
    }

    /// Records sorted by date, most recent first
    ///
    /// Games sharing a date keep their source order.
    pub fn sorted_by_date_desc(&self) -> Result<Vec<&GameRecord>, StatTableError> {
        let mut dated = Vec::with_capacity(self.records.len());
        for record in &self.records {
            dated.push((self.date(record)?, record));
        }
        dated.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(dated.into_iter().map(|(_, record)| record).collect())
    }

    /// Opponent of the most recent game, if the log has any games
    pub fn most_recent_opponent(&self) -> Result<Option<&str>, StatTableError> {
        let opponent_index = self.column_index(OPPONENT_COLUMN)?;
        let sorted = self.sorted_by_date_desc()?;
        Ok(sorted.first().map(|record| record.fields[opponent_index].trim()))
    }

    /// Values of a statistic, most recent game first
    ///
    /// A single statistic must exist in the header and parse in every game.
    /// For a combined statistic each game sums the components that are
    /// present and parseable; absent ones count as 0 for that game and are
    /// reported in [`StatSeries::missing`].
    pub fn series(&self, selector: &StatSelector) -> Result<StatSeries, StatTableError> {
        let sorted = self.sorted_by_date_desc()?;

        match selector {
            StatSelector::Single(column) => {
                let index = self.column_index(column)?;
                let mut values = Vec::with_capacity(sorted.len());
                for record in sorted {
                    let raw = &record.fields[index];
                    let value = parse_number(raw).ok_or_else(|| StatTableError::InvalidNumber {
                        row: record.row,
                        column: column.clone(),
                        value: raw.clone(),
                    })?;
                    values.push(value);
                }
                Ok(StatSeries { values, ..StatSeries::default() })
            }
            StatSelector::Combined { name, components } => {
                let indexes: Vec<(&String, Option<usize>)> =
                    components.iter().map(|c| (c, find_column(&self.header, c))).collect();
                if indexes.iter().all(|(_, index)| index.is_none()) {
                    return Err(StatTableError::NoSuchColumn(name.clone()));
                }

                let date_index = self.column_index(DATE_COLUMN)?;
                let mut series = StatSeries::default();
                for record in sorted {
                    let mut total = 0.0;
                    let mut absent = Vec::new();
                    for (component, index) in &indexes {
                        match index.and_then(|i| parse_number(&record.fields[i])) {
                            Some(value) => total += value,
                            None => absent.push((*component).clone()),
                        }
                    }
                    if !absent.is_empty() {
                        debug!(
                            "Game on {} missing {} for {}",
                            record.fields[date_index],
                            absent.join(", "),
                            name
                        );
                        series.missing.push(MissingComponent {
                            subject: record.fields[date_index].clone(),
                            components: absent,
                        });
                        series.missing_at.push(series.values.len());
                    }
                    series.values.push(total);
                }
                Ok(series)
            }
        }
    }
}

impl TryFrom<Vec<Vec<String>>> for GameLog {
    type Error = StatTableError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        GameLog::from_rows(rows)
    }
}

impl From<GameLog> for Vec<Vec<String>> {
    fn from(log: GameLog) -> Self {
        let mut rows = Vec::with_capacity(log.records.len() + 1);
        rows.push(log.header);
        rows.extend(log.records.into_iter().map(|record| record.fields));
        rows
    }
}

fn find_column(header: &[String], name: &str) -> Option<usize> {
    let name = name.trim();
    header.iter().position(|h| h.eq_ignore_ascii_case(name))
}

fn parse_number(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
