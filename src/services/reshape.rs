// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record reshaping for Strava activities and segment efforts.
//!
//! Every transform takes a slice of records and returns new records; input
//! is never mutated. Missing or falsy fields pass through untouched or get a
//! default, so a transform never fails.

use crate::models::activity::{is_truthy, number};
use crate::models::Record;
use crate::time_utils::format_clock;
use serde_json::Value;
use std::cmp::Ordering;

/// m/s to km/h.
const MS_TO_KMH: f64 = 3.6;

/// How `flatten_segment_effort` treats the nested segment's values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentVariant {
    /// Distance converted to km, missing values become 0.
    #[default]
    Kilometres,
    /// Distance left in metres, missing values become null.
    Raw,
}

/// Multiply truthy `average_speed` and `max_speed` by 3.6.
pub fn speed_to_kmh(records: &[Record]) -> Vec<Record> {
    map_records(records, |r| {
        for key in ["average_speed", "max_speed"] {
            let Some(value) = r.get(key) else { continue };
            if !is_truthy(value) {
                continue;
            }
            if let Some(speed) = value.as_f64() {
                r.insert(key.to_string(), Value::from(speed * MS_TO_KMH));
            }
        }
    })
}

/// Replace `moving_time` seconds with an unpadded `"H:M"` string.
pub fn moving_time_to_clock(records: &[Record]) -> Vec<Record> {
    map_records(records, |r| {
        let seconds = match r.get("moving_time") {
            Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        };
        if let Some(seconds) = seconds {
            r.insert("moving_time".to_string(), Value::from(format_clock(seconds)));
        }
    })
}

/// Convert `distance` from metres to kilometres.
pub fn distance_to_km(records: &[Record]) -> Vec<Record> {
    map_records(records, |r| {
        if let Some(distance) = number(r, "distance") {
            r.insert("distance".to_string(), Value::from(distance / 1000.0));
        }
    })
}

/// Rename `id` to `activity_id` (null when absent).
pub fn rename_id_to_activity_id(records: &[Record]) -> Vec<Record> {
    map_records(records, |r| {
        let id = r.remove("id").unwrap_or(Value::Null);
        r.insert("activity_id".to_string(), id);
    })
}

/// Replace the nested `athlete` object with `athlete_id` (null when absent).
pub fn rename_athlete_to_athlete_id(records: &[Record]) -> Vec<Record> {
    map_records(records, |r| {
        let athlete_id = r
            .remove("athlete")
            .and_then(|athlete| athlete.get("id").cloned())
            .unwrap_or(Value::Null);
        r.insert("athlete_id".to_string(), athlete_id);
    })
}

/// Lift `segment.{id, distance, elevation_high, elevation_low}` to the top
/// level as `segment_id`, `segment_distance`, `elevation_high` and
/// `elevation_low`, then drop `segment`.
pub fn flatten_segment_effort(records: &[Record], variant: SegmentVariant) -> Vec<Record> {
    map_records(records, |r| {
        let segment = match r.remove("segment") {
            Some(Value::Object(segment)) => segment,
            _ => Record::new(),
        };

        let field = |key: &str| match segment.get(key) {
            Some(v) if !v.is_null() => v.clone(),
            _ => match variant {
                SegmentVariant::Kilometres => Value::from(0),
                SegmentVariant::Raw => Value::Null,
            },
        };

        let distance = match variant {
            SegmentVariant::Kilometres => {
                Value::from(number(&segment, "distance").unwrap_or(0.0) / 1000.0)
            }
            SegmentVariant::Raw => field("distance"),
        };

        r.insert("segment_id".to_string(), field("id"));
        r.insert("segment_distance".to_string(), distance);
        r.insert("elevation_high".to_string(), field("elevation_high"));
        r.insert("elevation_low".to_string(), field("elevation_low"));
    })
}

/// Add `avg_slope = (elevation_high - elevation_low) * 0.001 / segment_distance`,
/// or 0 when the distance is not positive.
pub fn enrich_avg_slope(records: &[Record]) -> Vec<Record> {
    map_records(records, |r| {
        let distance = number(r, "segment_distance").unwrap_or(0.0);
        let slope = if distance > 0.0 {
            let high = number(r, "elevation_high").unwrap_or(0.0);
            let low = number(r, "elevation_low").unwrap_or(0.0);
            (high - low) * 0.001 / distance
        } else {
            0.0
        };
        r.insert("avg_slope".to_string(), Value::from(slope));
    })
}

/// The `n` records with the steepest `avg_slope`, steepest first.
///
/// Ties keep their original relative order.
pub fn top_n_by_slope(records: &[Record], n: usize) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let a = number(a, "avg_slope").unwrap_or(0.0);
        let b = number(b, "avg_slope").unwrap_or(0.0);
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

fn map_records(records: &[Record], mut f: impl FnMut(&mut Record)) -> Vec<Record> {
    records
        .iter()
        .map(|record| {
            let mut record = record.clone();
            f(&mut record);
            record
        })
        .collect()
}

/// One reshaping step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    SpeedToKmh,
    MovingTimeToClock,
    DistanceToKm,
    RenameIdToActivityId,
    RenameAthleteToAthleteId,
    FlattenSegmentEffort(SegmentVariant),
    EnrichAvgSlope,
    TopNBySlope(usize),
}

impl Transform {
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        match *self {
            Transform::SpeedToKmh => speed_to_kmh(records),
            Transform::MovingTimeToClock => moving_time_to_clock(records),
            Transform::DistanceToKm => distance_to_km(records),
            Transform::RenameIdToActivityId => rename_id_to_activity_id(records),
            Transform::RenameAthleteToAthleteId => rename_athlete_to_athlete_id(records),
            Transform::FlattenSegmentEffort(variant) => flatten_segment_effort(records, variant),
            Transform::EnrichAvgSlope => enrich_avg_slope(records),
            Transform::TopNBySlope(n) => top_n_by_slope(records, n),
        }
    }
}

/// An explicit, ordered list of transforms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Transform>,
}

impl Pipeline {
    pub fn new(steps: Vec<Transform>) -> Self {
        Self { steps }
    }

    /// Activity cleanup: km/h speeds, clock moving time, km distance, flat ids.
    pub fn activities() -> Self {
        Self::new(vec![
            Transform::SpeedToKmh,
            Transform::MovingTimeToClock,
            Transform::DistanceToKm,
            Transform::RenameIdToActivityId,
            Transform::RenameAthleteToAthleteId,
        ])
    }

    /// Segment efforts: flatten, derive slope, keep the `n` steepest.
    pub fn segment_efforts(variant: SegmentVariant, n: usize) -> Self {
        Self::new(vec![
            Transform::FlattenSegmentEffort(variant),
            Transform::EnrichAvgSlope,
            Transform::TopNBySlope(n),
        ])
    }

    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    pub fn run(&self, records: &[Record]) -> Vec<Record> {
        self.steps
            .iter()
            .fold(records.to_vec(), |acc, step| step.apply(&acc))
    }
}
