// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Concurrent admission tests.
//!
//! The service loop is single-threaded, but admission is serialized through a
//! `parking_lot::Mutex`. These tests feed one line from several threads and
//! check that arrival numbering stays gap-free, per-thread order is kept, and
//! the lock never deadlocks (using parking_lot's `deadlock_detection`).

use parking_lot::deadlock;
use priority_checkout::{ArrivalSeq, Cart, Checkout, Customer, PriorityFlags};
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

fn make_customer(thread: usize, n: usize) -> Customer {
    let name = format!("t{thread}-{n}");
    let flags = if n % 5 == 0 {
        PriorityFlags::pregnant()
    } else {
        PriorityFlags::NONE
    };
    let cart = Cart::with_items(name.as_str(), (0..n % 8).map(|i| format!("item-{i}")));
    Customer::new(name, flags, cart).unwrap()
}

/// Polls parking_lot's detector until stopped; returns how many cycles it saw.
fn start_deadlock_detector() -> (Arc<AtomicBool>, thread::JoinHandle<usize>) {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    let handle = thread::spawn(move || {
        let mut detected = 0;
        while running_clone.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(50));
            let deadlocks = deadlock::check_deadlock();
            for (i, threads) in deadlocks.iter().enumerate() {
                eprintln!("Deadlock #{}", i + 1);
                for t in threads {
                    eprintln!("Thread ID: {:?}", t.thread_id());
                }
            }
            detected += deadlocks.len();
        }
        detected
    });

    (running, handle)
}

#[test]
fn concurrent_admission_is_gap_free() {
    let (running, detector) = start_deadlock_detector();
    let checkout = Checkout::with_parts(|| dec!(1), ());

    let per_thread: Vec<Vec<ArrivalSeq>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let checkout = &checkout;
                scope.spawn(move || {
                    (0..PER_THREAD)
                        .map(|n| checkout.admit(make_customer(t, n)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    running.store(false, Ordering::SeqCst);
    assert_eq!(detector.join().unwrap(), 0, "deadlock detected");

    // Each thread observed strictly increasing numbers.
    for arrivals in &per_thread {
        assert!(arrivals.windows(2).all(|w| w[0] < w[1]));
    }

    // Together they cover 0..N exactly once.
    let mut all: Vec<u64> = per_thread.iter().flatten().map(|a| a.0).collect();
    all.sort_unstable();
    let expected: Vec<u64> = (0..(THREADS * PER_THREAD) as u64).collect();
    assert_eq!(all, expected);
    assert_eq!(checkout.waiting(), THREADS * PER_THREAD);
}

#[test]
fn concurrent_admission_then_serve_everyone() {
    let checkout = Checkout::with_parts(|| dec!(2), ());
    let admitted = AtomicUsize::new(0);

    thread::scope(|scope| {
        for t in 0..THREADS {
            let checkout = &checkout;
            let admitted = &admitted;
            scope.spawn(move || {
                for n in 0..PER_THREAD {
                    checkout.admit(make_customer(t, n));
                    admitted.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    let mut checkout = checkout;
    let summary = checkout.serve_all().unwrap();
    assert_eq!(summary.customers, admitted.load(Ordering::Relaxed));

    // Within a thread, same-tier customers keep their admission order.
    let mut last_seen: HashMap<(String, u8), usize> = HashMap::new();
    for invoice in checkout.report_invoices() {
        let (thread, n) = invoice.customer().split_once('-').unwrap();
        let n: usize = n.parse().unwrap();
        let tier = if n % 5 == 0 {
            3
        } else if invoice.len() < 5 {
            2
        } else {
            1
        };
        if let Some(prev) = last_seen.insert((thread.to_string(), tier), n) {
            assert!(prev < n, "{thread}: {prev} served after {n}");
        }
    }
}
