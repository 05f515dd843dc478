//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check cache semantics over arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, NoopStrategyCache, StrategyCache, StrategyTable, TtlStrategyCache};
use crate::models::SamplingStrategyResponse;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Service names from a small pool so sequences revisit keys
fn service_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z]{1,3}".prop_map(|s| s),
        Just("Checkout".to_string()),
        Just("checkout".to_string()),
    ]
}

fn response_strategy() -> impl Strategy<Value = SamplingStrategyResponse> {
    prop_oneof![
        (0.0f64..=1.0).prop_map(SamplingStrategyResponse::probabilistic),
        (0i32..1000).prop_map(SamplingStrategyResponse::rate_limiting),
    ]
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put {
        service: String,
        response: SamplingStrategyResponse,
    },
    Get {
        service: String,
    },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (service_strategy(), response_strategy())
            .prop_map(|(service, response)| CacheOp::Put { service, response }),
        service_strategy().prop_map(|service| CacheOp::Get { service }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Before the TTL elapses, every lookup observes the most recent put for
    // that service, or misses if there was none.
    #[test]
    fn prop_ttl_cache_last_write_wins(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let (observed, expected) = tokio_test::block_on(async {
            let cache = TtlStrategyCache::new(TEST_TTL);
            let mut model: HashMap<String, SamplingStrategyResponse> = HashMap::new();
            let mut observed = Vec::new();
            let mut expected = Vec::new();

            for op in ops {
                match op {
                    CacheOp::Put { service, response } => {
                        cache.put(&service, response.clone()).await;
                        model.insert(service, response);
                    }
                    CacheOp::Get { service } => {
                        observed.push(cache.get(&service).await);
                        expected.push(model.get(&service).cloned());
                    }
                }
            }

            cache.close().await.unwrap();
            (observed, expected)
        });

        prop_assert_eq!(observed, expected);
    }

    // The no-op cache never returns anything, whatever was put before.
    #[test]
    fn prop_noop_cache_always_misses(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let hits = tokio_test::block_on(async {
            let cache = NoopStrategyCache::new();
            let mut hits = 0usize;

            for op in ops {
                match op {
                    CacheOp::Put { service, response } => cache.put(&service, response).await,
                    CacheOp::Get { service } => {
                        if cache.get(&service).await.is_some() {
                            hits += 1;
                        }
                    }
                }
            }
            hits
        });

        prop_assert_eq!(hits, 0);
    }

    // An entry is served exactly while the probe instant is before its expiry.
    #[test]
    fn prop_entry_served_only_before_expiry(
        ttl_ms in 1u64..10_000,
        probe_ms in 0u64..20_000,
        response in response_strategy(),
    ) {
        let (found, removed) = tokio_test::block_on(async {
            let table = StrategyTable::new();
            let stored_at = Instant::now();
            let probe = stored_at + Duration::from_millis(probe_ms);

            table
                .insert(
                    "svc".to_string(),
                    CacheEntry::new(response.clone(), stored_at, Duration::from_millis(ttl_ms)),
                )
                .await;

            let found = table.lookup("svc", probe).await;
            let removed = table.purge_expired(probe).await;
            (found, removed)
        });

        if probe_ms < ttl_ms {
            prop_assert_eq!(found, Some(response));
            prop_assert_eq!(removed, 0);
        } else {
            prop_assert!(found.is_none());
            prop_assert_eq!(removed, 1);
        }
    }
}
