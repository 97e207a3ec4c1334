//! Integration tests for the native greeting artifacts.

use hello_ext::constants::messages;
use hello_ext::{Hello, greet};
use proptest::prelude::*;
use std::sync::Arc;
use std::sync::Barrier;
use std::thread;

#[test]
fn test_greet_and_hi_end_to_end() {
    assert_eq!(greet(), "hello, world");

    let hello = Hello::new();
    assert_eq!(hello.hi(), "hi there");
}

#[test]
fn test_constants_match_returned_text() {
    assert_eq!(greet(), messages::GREETING);
    assert_eq!(Hello.hi(), messages::HI);
}

#[test]
fn test_interleaved_calls_are_independent() {
    let a = Hello::new();
    assert_eq!(greet(), "hello, world");
    assert_eq!(a.hi(), "hi there");
    assert_eq!(greet(), "hello, world");
    let b = Hello::default();
    assert_eq!(b.hi(), a.hi());
}

#[test]
fn test_calls_across_threads() {
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let hello = Hello::new();
                (0..1000)
                    .map(|_| (greet(), hello.hi()))
                    .all(|pair| pair == ("hello, world", "hi there"))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap(), "thread observed unexpected text");
    }
}

#[test]
fn test_shared_instance_across_threads() {
    let hello = Arc::new(Hello::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let hello = Arc::clone(&hello);
            thread::spawn(move || hello.hi())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "hi there");
    }
}

proptest! {
    #[test]
    fn prop_greet_is_idempotent(calls in 1usize..256) {
        let first = greet();
        for _ in 0..calls {
            prop_assert_eq!(greet(), first);
        }
        prop_assert_eq!(first, "hello, world");
    }

    #[test]
    fn prop_any_number_of_instances_say_hi(count in 0usize..128) {
        let instances: Vec<Hello> = (0..count).map(|_| Hello::new()).collect();
        for hello in &instances {
            prop_assert_eq!(hello.hi(), "hi there");
        }
    }

    #[test]
    fn prop_call_order_does_not_matter(order in proptest::collection::vec(any::<bool>(), 0..64)) {
        let hello = Hello::default();
        for greet_first in order {
            if greet_first {
                prop_assert_eq!(greet(), "hello, world");
                prop_assert_eq!(hello.hi(), "hi there");
            } else {
                prop_assert_eq!(hello.hi(), "hi there");
                prop_assert_eq!(greet(), "hello, world");
            }
        }
    }
}
