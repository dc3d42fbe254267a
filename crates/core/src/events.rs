//! Event-array ingestion.
//!
//! Events are an `n × 3` integer table: onset sample, trigger value before the event, and event
//! id. They can come from an MNE text event file, from a table built by the caller, or be derived
//! from a stimulus channel.

use crate::{BidsError, BidsResult};
use std::fs;
use std::path::Path;

/// A stimulus channel events can be derived from.
pub trait StimChannel {
    /// Sample index of the first value returned by [`StimChannel::values`].
    fn first_sample(&self) -> i64 {
        0
    }

    /// Trigger values, one per sample.
    fn values(&self) -> &[i64];
}

/// A plain in-memory stimulus trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StimTrace {
    pub first_sample: i64,
    pub values: Vec<i64>,
}

impl StimChannel for StimTrace {
    fn first_sample(&self) -> i64 {
        self.first_sample
    }

    fn values(&self) -> &[i64] {
        &self.values
    }
}

/// Where events come from.
pub enum EventSource<'a> {
    /// MNE text event file.
    File(&'a Path),
    /// Rows built by the caller; every row must have 3 columns.
    Array(Vec<Vec<i64>>),
    /// Derived from a stimulus channel.
    Stim(&'a dyn StimChannel),
}

/// An `n × 3` event table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events(Vec<[i64; 3]>);

impl Events {
    pub fn rows(&self) -> &[[i64; 3]] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<[i64; 3]>> for Events {
    fn from(rows: Vec<[i64; 3]>) -> Self {
        Events(rows)
    }
}

/// Reads events from `source`.
///
/// # Errors
///
/// Returns `BidsError` if:
/// - the event file cannot be read ([`BidsError::FileRead`])
/// - a row does not have exactly 3 integer columns ([`BidsError::InvalidEvents`])
pub fn read_events(source: EventSource<'_>) -> BidsResult<Events> {
    match source {
        EventSource::File(path) => read_event_file(path),
        EventSource::Array(rows) => from_rows(rows),
        EventSource::Stim(channel) => Ok(find_events(channel)),
    }
}

fn from_rows(rows: Vec<Vec<i64>>) -> BidsResult<Events> {
    rows.into_iter()
        .map(|row| {
            <[i64; 3]>::try_from(row.as_slice()).map_err(|_| {
                BidsError::InvalidEvents(format!(
                    "Events must have second dimension of length 3, found {}",
                    row.len()
                ))
            })
        })
        .collect::<BidsResult<Vec<_>>>()
        .map(Events)
}

/// Parses an MNE text event file.
///
/// Rows have three integer columns, or four where the second is the onset time in seconds and
/// is dropped. Blank lines and `#` comments are skipped.
fn read_event_file(path: &Path) -> BidsResult<Events> {
    let content = fs::read_to_string(path).map_err(BidsError::FileRead)?;

    let mut rows = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split_whitespace().collect();
        let integers = match columns.len() {
            3 => columns,
            4 => vec![columns[0], columns[2], columns[3]],
            n => {
                return Err(BidsError::InvalidEvents(format!(
                    "{}:{}: expected 3 or 4 columns, found {}",
                    path.display(),
                    number + 1,
                    n
                )))
            }
        };

        let mut row = [0i64; 3];
        for (slot, text) in row.iter_mut().zip(integers) {
            *slot = text.parse().map_err(|_| {
                BidsError::InvalidEvents(format!(
                    "{}:{}: not an integer: {}",
                    path.display(),
                    number + 1,
                    text
                ))
            })?;
        }
        rows.push(row);
    }

    tracing::debug!("read {} events from {}", rows.len(), path.display());
    Ok(Events(rows))
}

/// Emits an event wherever the trigger value changes to a non-zero value.
fn find_events(channel: &dyn StimChannel) -> Events {
    let first = channel.first_sample();
    let mut previous = 0i64;
    let mut rows = Vec::new();

    for (index, &value) in channel.values().iter().enumerate() {
        if value != previous && value != 0 {
            rows.push([first + index as i64, previous, value]);
        }
        previous = value;
    }

    if rows.is_empty() {
        tracing::warn!("no events found on stimulus channel");
    }
    Events(rows)
}
