//! Carriers are inert values that cross thread boundaries freely.

use std::sync::Arc;
use std::thread;

use valstat::{Errc, HttpStatus, HttpValstat, PosixValstat, Valstat};

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn specializations_are_send_and_sync() {
    assert_send_sync::<PosixValstat<String>>();
    assert_send_sync::<HttpValstat<Vec<u8>>>();
    assert_send_sync::<Valstat<Arc<str>, Errc>>();
}

#[test]
fn shared_carrier_reads_the_same_everywhere() {
    let carrier: Arc<HttpValstat<String>> =
        Arc::new(Valstat::info("body".to_owned(), HttpStatus::PartialContent));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&carrier);
            thread::spawn(move || (shared.value().cloned(), shared.status().copied()))
        })
        .collect();
    for handle in handles {
        let seen = handle.join().unwrap_or_default();
        assert_eq!(
            seen,
            (Some("body".to_owned()), Some(HttpStatus::PartialContent))
        );
    }
}

#[test]
fn copies_moved_to_threads_are_independent() {
    let original: PosixValstat<u32> = Valstat::ok(10);
    let handle = thread::spawn(move || original.map_value(|n| n + 1));
    let changed = handle.join().unwrap_or_default();
    assert_eq!(changed, Valstat::ok(11));
    assert_eq!(original, Valstat::ok(10));
}
