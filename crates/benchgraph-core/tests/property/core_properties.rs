use benchgraph_core::types::{AxisUnit, ErrorRange, MemoryUnit, TimeUnit};
use proptest::prelude::*;

fn arb_time_unit() -> impl Strategy<Value = TimeUnit> {
    prop_oneof![
        Just(TimeUnit::Nanos),
        Just(TimeUnit::Micros),
        Just(TimeUnit::Millis),
        Just(TimeUnit::Seconds),
    ]
}

fn arb_memory_unit() -> impl Strategy<Value = MemoryUnit> {
    prop_oneof![
        Just(MemoryUnit::Bytes),
        Just(MemoryUnit::Kilobytes),
        Just(MemoryUnit::Megabytes),
        Just(MemoryUnit::Gigabytes),
        Just(MemoryUnit::Terabytes),
    ]
}

// ── Unit tokens parse back to the unit that printed them ────────────────

proptest! {
    #[test]
    fn time_unit_token_is_stable(unit in arb_time_unit()) {
        prop_assert_eq!(unit.to_string().parse::<TimeUnit>().unwrap(), unit);
        prop_assert_eq!(unit.as_str(), unit.to_string());
    }

    #[test]
    fn memory_unit_token_is_stable(unit in arb_memory_unit()) {
        prop_assert_eq!(unit.to_string().parse::<MemoryUnit>().unwrap(), unit);
    }
}

// ── Multipliers climb the ladder in steps of 1000 ────────────────────────

proptest! {
    #[test]
    fn ladder_steps_are_powers_of_1000(idx in 0usize..3) {
        let lower = if idx == 0 { TimeUnit::BASE } else { TimeUnit::LADDER[idx - 1] };
        let upper = TimeUnit::LADDER[idx];
        prop_assert_eq!(upper.multiplier() / lower.multiplier(), 1000.0);
    }
}

// ── Range strings keep their prefix and magnitude ───────────────────────

proptest! {
    #[test]
    fn range_parse_keeps_magnitude(
        prefix in prop_oneof![Just("± "), Just("+-"), Just("~ ")],
        magnitude in 0.0f64..1e9,
    ) {
        let range = ErrorRange::parse(&format!("{prefix}{magnitude}")).unwrap();
        prop_assert_eq!(range.prefix.as_str(), prefix);
        prop_assert_eq!(range.magnitude, magnitude);
        prop_assert_eq!(ErrorRange::parse(&range.encode()).unwrap(), range);
    }
}
