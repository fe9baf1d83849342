use std::{collections::BTreeMap, slice::Iter};

use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

use crate::Property;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub date: String,
    pub weight: Weight,
    pub reps: u32,
}

/// Measurements per exercise name, each in recording order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSeries(BTreeMap<String, Vec<ProgressPoint>>);

impl ProgressSeries {
    #[must_use]
    pub fn get(&self, exercise_name: &str) -> &[ProgressPoint] {
        self.0.get(exercise_name).map_or(&[], Vec::as_slice)
    }

    pub fn exercise_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

impl<const N: usize> From<[(String, Vec<ProgressPoint>); N]> for ProgressSeries {
    fn from(value: [(String, Vec<ProgressPoint>); N]) -> Self {
        Self(BTreeMap::from(value))
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Weight(pub(crate) f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 lbs")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1 lbs")]
    InvalidResolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressMetric {
    Reps,
    Weight,
}

impl Property for ProgressMetric {
    fn iter() -> Iter<'static, ProgressMetric> {
        static METRIC: [ProgressMetric; 2] = [ProgressMetric::Reps, ProgressMetric::Weight];
        METRIC.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ProgressMetric::Reps => "Reps",
            ProgressMetric::Weight => "Weight (lbs)",
        }
    }
}

impl ProgressMetric {
    #[must_use]
    pub fn value(self, point: &ProgressPoint) -> f32 {
        match self {
            ProgressMetric::Reps => {
                #[allow(clippy::cast_precision_loss)]
                let reps = point.reps as f32;
                reps
            }
            ProgressMetric::Weight => point.weight.into(),
        }
    }
}

/// Labeled values of one metric, in the order of the points.
#[must_use]
pub fn series_points(points: &[ProgressPoint], metric: ProgressMetric) -> Vec<(String, f32)> {
    points
        .iter()
        .map(|p| (p.date.clone(), metric.value(p)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub first: f32,
    pub last: f32,
    pub change: f32,
}

#[must_use]
pub fn summary(points: &[ProgressPoint], metric: ProgressMetric) -> Option<ProgressSummary> {
    let first = metric.value(points.first()?);
    let last = metric.value(points.last()?);
    Some(ProgressSummary {
        first,
        last,
        change: last - first,
    })
}
