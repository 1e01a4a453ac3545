//! Axis-generic unit arithmetic shared by the time and memory passes.

use benchgraph_core::constants::{SCALE_UP_THRESHOLD, UNIT_STEP};
use benchgraph_core::types::AxisUnit;

/// Pick the unit an axis scales up to.
///
/// `canonical` holds values already in `U::BASE`; `None` entries are
/// points without data on this axis and are ignored. Starting from the
/// base unit, step one unit up the ladder while the running minimum is at
/// least the threshold, dividing the minimum by the step each time.
/// Returns `None` when no value is present.
pub fn scale_up_target<U: AxisUnit>(canonical: impl IntoIterator<Item = Option<f64>>) -> Option<U> {
    let mut min = canonical
        .into_iter()
        .flatten()
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.min(v))))?;

    let mut unit = U::BASE;
    for &next in U::LADDER {
        if min.is_nan() || min < SCALE_UP_THRESHOLD {
            break;
        }
        min /= UNIT_STEP;
        unit = next;
    }
    Some(unit)
}

/// Convert `value` from `from` to `to`.
///
/// Both multipliers are exact powers of 1000, so the ratio is exact and the
/// conversion is a single correctly rounded multiply or divide. Same-unit
/// conversion returns `value` untouched.
pub fn convert<U: AxisUnit>(value: f64, from: U, to: U) -> f64 {
    let (f, t) = (from.multiplier(), to.multiplier());
    if f == t {
        value
    } else if f > t {
        value * (f / t)
    } else {
        value / (t / f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchgraph_core::types::{MemoryUnit, TimeUnit};

    #[test]
    fn test_empty_has_no_target() {
        assert_eq!(scale_up_target::<TimeUnit>(Vec::new()), None);
        assert_eq!(scale_up_target::<MemoryUnit>(vec![None, None]), None);
    }

    #[test]
    fn test_below_threshold_stays_base() {
        assert_eq!(
            scale_up_target::<TimeUnit>(vec![Some(699.0), Some(5000.0)]),
            Some(TimeUnit::Nanos)
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(
            scale_up_target::<TimeUnit>(vec![Some(700.0)]),
            Some(TimeUnit::Micros)
        );
    }

    #[test]
    fn test_stops_at_top_of_ladder() {
        assert_eq!(
            scale_up_target::<TimeUnit>(vec![Some(5e15)]),
            Some(TimeUnit::Seconds)
        );
        assert_eq!(
            scale_up_target::<MemoryUnit>(vec![Some(5e18)]),
            Some(MemoryUnit::Terabytes)
        );
    }

    #[test]
    fn test_nulls_ignored_for_minimum() {
        assert_eq!(
            scale_up_target::<MemoryUnit>(vec![None, Some(2_000_000.0)]),
            Some(MemoryUnit::Megabytes)
        );
    }

    #[test]
    fn test_convert_directions() {
        assert_eq!(convert(800.0, TimeUnit::Nanos, TimeUnit::Micros), 0.8);
        assert_eq!(convert(1.5, TimeUnit::Seconds, TimeUnit::Millis), 1500.0);
        assert_eq!(convert(0.3, TimeUnit::Millis, TimeUnit::Millis), 0.3);
    }
}
