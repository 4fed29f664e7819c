// SPDX-License-Identifier: MIT OR Apache-2.0
use contextlog::{Context, ContextLoggerCache, InMemoryLogger};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 16;

#[test]
fn concurrent_first_requests_share_one_binding() {
    let base = Arc::new(InMemoryLogger::new());
    let cache = Arc::new(ContextLoggerCache::new(base.clone()));
    let barrier = Arc::new(Barrier::new(THREADS));
    let context = Context::named("contended");

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let cache = cache.clone();
            let barrier = barrier.clone();
            let context = context.clone();
            thread::spawn(move || {
                barrier.wait();
                cache.get_logger(&context)
            })
        })
        .collect();
    let bindings: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread should complete successfully"))
        .collect();

    assert_eq!(cache.len(), 1);
    assert_eq!(base.derivations(), 1);
    for binding in &bindings {
        assert_eq!(binding.context(), Some(&context));
        assert!(Arc::ptr_eq(binding, &bindings[0]));
    }
}

#[test]
fn concurrent_requests_for_many_contexts() {
    let base = Arc::new(InMemoryLogger::new());
    let cache = Arc::new(ContextLoggerCache::new(base.clone()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let cache = cache.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for n in 0..8 {
                    let context = Context::named(format!("ctx-{}", (i + n) % 4));
                    let binding = cache.get_logger(&context);
                    assert_eq!(binding.context(), Some(&context));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Thread should complete successfully");
    }

    assert_eq!(cache.len(), 4);
    assert_eq!(base.derivations(), 4);
}
