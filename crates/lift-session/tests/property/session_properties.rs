use std::sync::Arc;

use lift_core::config::SessionConfig;
use lift_core::{Role, SessionId};
use lift_session::{InMemorySessionStore, SessionMemory};
use proptest::prelude::*;

proptest! {
    #[test]
    fn history_holds_most_recent_min_n_k(
        n in 0usize..30,
        half_cap in 1usize..8
    ) {
        let k = half_cap * 2;
        let cfg = SessionConfig {
            max_turns: k,
            max_persisted_bytes: 1_000_000,
            ..SessionConfig::default()
        };
        let store = Arc::new(InMemorySessionStore::new(&cfg));
        let memory = SessionMemory::new(store, &cfg).unwrap();
        let sid = SessionId::from("prop");

        for i in 0..n {
            let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
            memory.append(&sid, role, &format!("m{i}")).unwrap();
        }

        let history = memory.get(&sid).unwrap();
        prop_assert_eq!(history.len(), n.min(k));
        let expected: Vec<String> = (n.saturating_sub(k)..n).map(|i| format!("m{i}")).collect();
        let actual: Vec<String> = history.iter().map(|t| t.content.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn exchanges_never_split_pairs(
        exchanges in 0usize..20,
        half_cap in 1usize..6
    ) {
        let cfg = SessionConfig {
            max_turns: half_cap * 2,
            max_persisted_bytes: 1_000_000,
            ..SessionConfig::default()
        };
        let store = Arc::new(InMemorySessionStore::new(&cfg));
        let memory = SessionMemory::new(store, &cfg).unwrap();
        let sid = SessionId::from("pairs");

        for i in 0..exchanges {
            let version = memory.snapshot(&sid).unwrap().version;
            memory
                .append_exchange(&sid, version, &format!("q{i}"), &format!("a{i}"))
                .unwrap();
        }

        let history = memory.get(&sid).unwrap();
        prop_assert_eq!(history.len() % 2, 0);
        for pair in history.chunks(2) {
            prop_assert_eq!(pair[0].role, Role::User);
            prop_assert_eq!(pair[1].role, Role::Assistant);
            prop_assert_eq!(pair[0].seq + 1, pair[1].seq);
        }
    }
}

fn turn_text(max_chars: usize) -> impl Strategy<Value = String> {
    // Mix of one-byte, multi-byte, and escaped characters.
    proptest::collection::vec(
        prop::sample::select(vec!['a', ' ', 'é', '漢', '😀', '"', '\n', '\u{7}']),
        0..=max_chars,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn default_config_keeps_every_committed_exchange(
        exchanges in proptest::collection::vec(
            (turn_text(SessionConfig::default().max_turn_chars),
             turn_text(SessionConfig::default().max_turn_chars)),
            1..6,
        )
    ) {
        let cfg = SessionConfig::default();
        let store = Arc::new(InMemorySessionStore::new(&cfg));
        let memory = SessionMemory::new(store, &cfg).unwrap();
        let sid = SessionId::from("long-turns");

        for (i, (user, reply)) in exchanges.iter().enumerate() {
            let version = memory.snapshot(&sid).unwrap().version;
            let receipt = memory.append_exchange(&sid, version, user, reply).unwrap();

            let history = memory.get(&sid).unwrap();
            let expected_len = (2 * (i + 1)).min(cfg.max_turns);
            prop_assert_eq!(history.len(), expected_len);
            prop_assert_eq!(receipt.history_len, expected_len);
            prop_assert_eq!(&history[history.len() - 2].content, user);
            prop_assert_eq!(&history[history.len() - 1].content, reply);
        }
    }
}
