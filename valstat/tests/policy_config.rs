//! Loading a `ConsumptionPolicy` through layered configuration.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use rstest::rstest;
use valstat::{ConsumptionPolicy, InfoPolicy};

fn load() -> figment::Result<ConsumptionPolicy> {
    Figment::from(Serialized::defaults(ConsumptionPolicy::default()))
        .merge(Toml::file("valstat.toml"))
        .merge(Env::prefixed("VALSTAT_"))
        .extract()
}

#[test]
fn defaults_apply_without_sources() {
    Jail::expect_with(|_| {
        assert_eq!(load()?, ConsumptionPolicy::ACCEPT_INFO);
        Ok(())
    });
}

#[test]
fn file_overrides_defaults() {
    Jail::expect_with(|j| {
        j.create_file("valstat.toml", r#"info = "reject""#)?;
        assert_eq!(load()?.info, InfoPolicy::Reject);
        Ok(())
    });
}

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|j| {
        j.create_file("valstat.toml", r#"info = "reject""#)?;
        j.set_env("VALSTAT_INFO", "accept");
        assert_eq!(load()?.info, InfoPolicy::Accept);
        Ok(())
    });
}

#[rstest]
#[case(r#"info = "maybe""#)]
#[case(r#"infos = "reject""#)]
fn rejects_invalid_policy(#[case] toml: &str) {
    let result: figment::Result<ConsumptionPolicy> =
        Figment::new().merge(Toml::string(toml)).extract();
    assert!(result.is_err(), "expected {toml:?} to be rejected");
}

#[test]
fn policy_round_trips_through_json() {
    let json = serde_json::to_string(&ConsumptionPolicy::REJECT_INFO).unwrap_or_default();
    assert_eq!(json, r#"{"info":"reject"}"#);
    let empty: ConsumptionPolicy =
        serde_json::from_str("{}").unwrap_or(ConsumptionPolicy::REJECT_INFO);
    assert_eq!(empty, ConsumptionPolicy::default());
}
