//! Property-based tests for the persisted format.
//!
//! Uses proptest to verify:
//! 1. Any `StoredCollection` survives encode → decode.
//! 2. The legacy bare-array form decodes to the same collection.
//! 3. Arbitrary text never causes a panic in `decode` (returns `Err` gracefully).

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use tasklists_proto::codec;
use tasklists_proto::stored::{StoredCollection, StoredList, StoredTask};

/// Strategy for generating arbitrary `StoredTask` values.
fn arb_task() -> impl Strategy<Value = StoredTask> {
    (
        "[^\x00]{1,64}",
        any::<bool>(),
        prop::option::of("20[0-9]{2}-[01][0-9]-[0-3][0-9]T[0-2][0-9]:[0-5][0-9]"),
    )
        .prop_map(|(text, completed, due)| {
            let task = StoredTask::new(text, completed);
            match due {
                Some(due) => task.with_date_time(due),
                None => task,
            }
        })
}

/// Strategy for generating arbitrary `StoredList` values.
fn arb_list() -> impl Strategy<Value = StoredList> {
    ("[^\x00]{1,32}", prop::collection::vec(arb_task(), 0..8))
        .prop_map(|(name, items)| StoredList::new(name, items))
}

/// Strategy for generating arbitrary `StoredCollection` values.
fn arb_collection() -> impl Strategy<Value = StoredCollection> {
    prop::collection::vec(arb_list(), 0..6).prop_map(|lists| StoredCollection { lists })
}

proptest! {
    #[test]
    fn collection_round_trip(collection in arb_collection()) {
        let text = codec::encode(&collection).unwrap();
        let decoded = codec::decode(&text).unwrap();
        prop_assert_eq!(collection, decoded);
    }

    #[test]
    fn legacy_array_decodes_like_wrapped(collection in arb_collection()) {
        let bare = serde_json::to_string(&collection.lists).unwrap();
        let decoded = codec::decode(&bare).unwrap();
        prop_assert_eq!(collection, decoded);
    }

    #[test]
    fn random_text_never_panics(text in ".{0,256}") {
        let _ = codec::decode(&text);
    }
}
