//! Property tests for carrier occupancy across arbitrary payloads.

use proptest::prelude::*;
use valstat::{Errc, Metastate, Occupancy, Valstat};

fn errc() -> impl Strategy<Value = Errc> {
    prop::sample::select(Errc::ALL)
}

fn any_carrier() -> impl Strategy<Value = Valstat<String, Errc>> {
    (proptest::option::of(".{0,16}"), proptest::option::of(errc()))
        .prop_map(|(value, status)| Valstat::new(value, status))
}

proptest! {
    /// A value-only carrier reports the value channel and nothing else.
    #[test]
    fn value_only_round_trips(value in any::<i64>()) {
        let carrier: Valstat<i64, Errc> = Valstat::ok(value);
        prop_assert!(carrier.has_value());
        prop_assert!(!carrier.has_status());
        prop_assert_eq!(carrier.value(), Some(&value));
        prop_assert_eq!(carrier.into_value(), Ok(value));
    }

    /// A status-only carrier is the mirror image.
    #[test]
    fn status_only_round_trips(status in errc()) {
        let carrier: Valstat<i64, Errc> = Valstat::error(status);
        prop_assert!(!carrier.has_value());
        prop_assert!(carrier.has_status());
        prop_assert_eq!(carrier.status(), Some(&status));
    }

    /// Both channels survive construction unchanged when both are set.
    #[test]
    fn both_channels_are_independently_retrievable(value in ".{0,16}", status in errc()) {
        let carrier = Valstat::info(value.clone(), status);
        prop_assert_eq!(carrier.try_value(), Ok(&value));
        prop_assert_eq!(carrier.try_status(), Ok(&status));
    }

    /// Occupancy agrees with the predicates, and asking twice changes nothing.
    #[test]
    fn predicates_are_idempotent(carrier in any_carrier()) {
        let first = (carrier.has_value(), carrier.has_status(), carrier.occupancy());
        let second = (carrier.has_value(), carrier.has_status(), carrier.occupancy());
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.2, Occupancy::from_flags(first.0, first.1));
    }

    /// Mapping one channel never disturbs the other.
    #[test]
    fn channels_are_independent(carrier in any_carrier()) {
        let (value, status) = carrier.clone().into_parts();

        let mapped_value = carrier.clone().map_value(|v| v.len());
        prop_assert_eq!(mapped_value.status(), status.as_ref());
        prop_assert_eq!(mapped_value.value().copied(), value.as_ref().map(String::len));

        let mapped_status = carrier.map_status(Errc::as_str);
        prop_assert_eq!(mapped_status.value(), value.as_ref());
        prop_assert_eq!(mapped_status.status().copied(), status.map(Errc::as_str));
    }

    /// The strict form carries the same occupancy and converts back losslessly.
    #[test]
    fn metastate_round_trips(carrier in any_carrier()) {
        let state: Metastate<String, Errc> = carrier.clone().into_metastate();
        prop_assert_eq!(state.occupancy(), carrier.occupancy());
        prop_assert_eq!(Valstat::from(state), carrier);
    }
}
