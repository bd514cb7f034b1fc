//! Property tests for configuration files.

use bondval_config::{Validate, ValuationConfig};
use bondval_core::NoneFrequencyPolicy;
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = ValuationConfig> {
    (
        prop::sample::select(vec![';', ',', '|', '\t']),
        "[a-z][a-z0-9_]{0,15}",
        any::<bool>(),
        prop::sample::select(vec![NoneFrequencyPolicy::Legacy, NoneFrequencyPolicy::NoPayments]),
        any::<bool>(),
        1usize..=20,
    )
        .prop_map(
            |(delimiter, output_prefix, parallel, none_frequency, validate_ranges, history_count)| {
                ValuationConfig {
                    delimiter,
                    output_prefix,
                    parallel,
                    none_frequency,
                    validate_ranges,
                    history_count,
                }
            },
        )
}

proptest! {
    #[test]
    fn prop_valid_config_survives_toml(config in arb_config()) {
        prop_assert!(config.is_valid());
        let text = config.to_toml_string().unwrap();
        let parsed = ValuationConfig::from_toml_str(&text).unwrap();
        prop_assert_eq!(parsed, config);
    }

    #[test]
    fn prop_history_count_outside_range_rejected(count in 21usize..10_000) {
        let config = ValuationConfig { history_count: count, ..ValuationConfig::default() };
        prop_assert!(!config.is_valid());
    }
}
