//! Rescale the points of one chart to a shared time unit and, when memory
//! data is present, a shared memory unit.
//!
//! Time pass: every value is canonicalized to nanoseconds, the target unit
//! is chosen by the scale-up rule, then each value (and its `range`
//! magnitude) is converted from its own unit to the target in one step.
//! Memory pass: the same over `bytes_allocated`. Points without memory data
//! are not touched at all. Points already in the target unit are left
//! untouched, which makes normalization idempotent.

use serde::Serialize;

use benchgraph_core::errors::NormalizeError;
use benchgraph_core::types::{
    AxisUnit, ErrorRange, Measurement, MemoryUnit, Series, SeriesPoint, TimeUnit,
};

use super::axis::{convert, scale_up_target};
use crate::jobs::JobGroup;

/// Units an axis set was normalized to. `None` means the axis has no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NormalizeOutcome {
    pub time_unit: Option<TimeUnit>,
    pub memory_unit: Option<MemoryUnit>,
}

/// Rewrites a chart's measurements into one unit per axis.
pub struct UnitNormalizer;

impl UnitNormalizer {
    /// Normalize every measurement that shares one chart.
    ///
    /// Ranges are parsed before anything is rewritten, so a malformed range
    /// leaves every measurement unchanged.
    pub fn normalize<'a>(
        measurements: impl IntoIterator<Item = &'a mut Measurement>,
    ) -> Result<NormalizeOutcome, NormalizeError> {
        let mut measurements: Vec<&mut Measurement> = measurements.into_iter().collect();
        if measurements.is_empty() {
            return Ok(NormalizeOutcome::default());
        }

        let time_unit = normalize_time(&mut measurements)?;
        let memory_unit = normalize_memory(&mut measurements);

        tracing::trace!(
            points = measurements.len(),
            time_unit = ?time_unit,
            memory_unit = ?memory_unit,
            "normalized axis units"
        );
        Ok(NormalizeOutcome {
            time_unit,
            memory_unit,
        })
    }

    /// Normalize a flat slice of points as one chart.
    pub fn normalize_points(
        points: &mut [SeriesPoint],
    ) -> Result<NormalizeOutcome, NormalizeError> {
        Self::normalize(points.iter_mut().map(|p| &mut p.result))
    }

    /// Normalize one series-by-name chart.
    pub fn normalize_series(series: &mut Series) -> Result<NormalizeOutcome, NormalizeError> {
        Self::normalize_points(&mut series.points)
    }

    /// Normalize every job of one base name together, so all lines on the
    /// chart share an axis.
    pub fn normalize_group(group: &mut JobGroup) -> Result<NormalizeOutcome, NormalizeError> {
        Self::normalize(group.measurements_mut())
    }
}

fn normalize_time(
    measurements: &mut [&mut Measurement],
) -> Result<Option<TimeUnit>, NormalizeError> {
    let ranges = measurements
        .iter()
        .map(|m| {
            m.range
                .as_deref()
                .map(ErrorRange::parse)
                .transpose()
                .map_err(|source| NormalizeError::MalformedRange {
                    benchmark: m.name.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let Some(target) = scale_up_target::<TimeUnit>(
        measurements
            .iter()
            .map(|m| Some(convert(m.value, m.unit, TimeUnit::BASE))),
    ) else {
        return Ok(None);
    };

    for (m, range) in measurements.iter_mut().zip(ranges) {
        let from = m.unit;
        if from == target {
            continue;
        }
        m.value = convert(m.value, from, target);
        m.range = range.map(|r| r.map_magnitude(|v| convert(v, from, target)).encode());
        m.unit = target;
    }
    Ok(Some(target))
}

fn normalize_memory(measurements: &mut [&mut Measurement]) -> Option<MemoryUnit> {
    if !measurements.iter().any(|m| m.has_memory_data()) {
        return None;
    }

    let target = scale_up_target::<MemoryUnit>(measurements.iter().map(|m| {
        m.bytes_allocated
            .map(|b| convert(b, m.memory_unit.unwrap_or_default(), MemoryUnit::BASE))
    }))?;

    for m in measurements.iter_mut() {
        if let Some(bytes) = m.bytes_allocated {
            let from = m.memory_unit.unwrap_or_default();
            m.bytes_allocated = Some(convert(bytes, from, target));
            m.memory_unit = Some(target);
        }
    }
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(value: f64, unit: TimeUnit) -> Measurement {
        Measurement::new("bench", value, unit)
    }

    #[test]
    fn test_empty_is_noop() {
        let outcome = UnitNormalizer::normalize(Vec::<&mut Measurement>::new()).unwrap();
        assert_eq!(outcome, NormalizeOutcome::default());
    }

    #[test]
    fn test_mixed_input_units_meet_on_one_unit() {
        let mut ms = vec![m(2.0, TimeUnit::Millis), m(500_000.0, TimeUnit::Nanos)];
        let outcome = UnitNormalizer::normalize(ms.iter_mut()).unwrap();
        assert_eq!(outcome.time_unit, Some(TimeUnit::Micros));
        assert_eq!(ms[0].value, 2000.0);
        assert_eq!(ms[1].value, 500.0);
        assert!(ms.iter().all(|m| m.unit == TimeUnit::Micros));
    }

    #[test]
    fn test_range_follows_value() {
        let mut ms = vec![m(1500.0, TimeUnit::Nanos).with_range("± 300")];
        UnitNormalizer::normalize(ms.iter_mut()).unwrap();
        assert_eq!(ms[0].unit, TimeUnit::Micros);
        assert_eq!(ms[0].value, 1.5);
        assert_eq!(ms[0].range.as_deref(), Some("± 0.3"));
    }

    #[test]
    fn test_malformed_range_leaves_points_untouched() {
        let mut ms = vec![
            m(1500.0, TimeUnit::Nanos),
            m(2500.0, TimeUnit::Nanos).with_range("± lots"),
        ];
        let before = ms.clone();
        let err = UnitNormalizer::normalize(ms.iter_mut()).unwrap_err();
        assert!(matches!(err, NormalizeError::MalformedRange { .. }));
        assert_eq!(ms, before);
    }

    #[test]
    fn test_points_without_memory_keep_their_memory_unit() {
        let mut ms = vec![
            m(1.0, TimeUnit::Nanos).with_memory(3.0, Some(MemoryUnit::Kilobytes)),
            Measurement {
                memory_unit: Some(MemoryUnit::Gigabytes),
                ..m(1.0, TimeUnit::Nanos)
            },
        ];
        let outcome = UnitNormalizer::normalize(ms.iter_mut()).unwrap();
        assert_eq!(outcome.memory_unit, Some(MemoryUnit::Kilobytes));
        assert_eq!(ms[0].bytes_allocated, Some(3.0));
        assert_eq!(ms[1].memory_unit, Some(MemoryUnit::Gigabytes));
        assert_eq!(ms[1].bytes_allocated, None);
    }

    #[test]
    fn test_small_memory_lands_on_bytes() {
        let mut ms = vec![m(1.0, TimeUnit::Nanos).with_memory(512.0, None)];
        let outcome = UnitNormalizer::normalize(ms.iter_mut()).unwrap();
        assert_eq!(outcome.memory_unit, Some(MemoryUnit::Bytes));
        assert_eq!(ms[0].memory_unit, Some(MemoryUnit::Bytes));
    }
}
