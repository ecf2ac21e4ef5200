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

//! Priority-ordered service queue.
//!
//! Customers are kept in a [`BinaryHeap`] keyed by [`PriorityKey`]. The key
//! is computed once on admission, so a customer's position never moves while
//! they wait.
//!
//! ```text
//!   Empty ──enqueue──► NonEmpty ──remove_highest──► NonEmpty | Empty
//!     │
//!     └──remove_highest──► Err(EmptyQueue)
//! ```

use crate::CheckoutError;
use crate::base::ArrivalSeq;
use crate::customer::Customer;
use crate::priority::{PriorityKey, Tier, TierReason};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A customer admitted to the queue, with the arrival number and tier fixed
/// at admission.
#[derive(Debug, Clone)]
pub struct QueuedCustomer {
    key: PriorityKey,
    customer: Customer,
}

impl QueuedCustomer {
    pub fn arrival(&self) -> ArrivalSeq {
        self.key.arrival
    }

    pub fn tier(&self) -> Tier {
        self.key.tier
    }

    pub fn reason(&self) -> TierReason {
        TierReason::of(&self.customer)
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn into_customer(self) -> Customer {
        self.customer
    }
}

impl PartialEq for QueuedCustomer {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for QueuedCustomer {}

impl Ord for QueuedCustomer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for QueuedCustomer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Admission and selection structure for the checkout line.
///
/// # Invariants
///
/// - Arrival numbers start at 0 and increase by one per [`enqueue`](Self::enqueue),
///   including across periods where the queue is empty.
/// - [`remove_highest`](Self::remove_highest) always returns the greatest
///   [`PriorityKey`]; keys are unique so the choice is deterministic.
#[derive(Debug, Default)]
pub struct ServiceQueue {
    heap: BinaryHeap<QueuedCustomer>,
    next_arrival: ArrivalSeq,
}

impl ServiceQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_arrival: ArrivalSeq(0),
        }
    }

    /// Admits a customer and returns the arrival number they were given.
    pub fn enqueue(&mut self, customer: Customer) -> ArrivalSeq {
        let arrival = self.next_arrival;
        self.next_arrival = arrival.next();
        let key = PriorityKey::new(&customer, arrival);
        self.heap.push(QueuedCustomer { key, customer });
        arrival
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// The customer who would be served next, if any.
    pub fn peek_highest(&self) -> Option<&QueuedCustomer> {
        self.heap.peek()
    }

    /// Removes and returns the highest-ranked customer.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyQueue`] when nobody is waiting.
    pub fn remove_highest(&mut self) -> Result<QueuedCustomer, CheckoutError> {
        self.heap.pop().ok_or(CheckoutError::EmptyQueue)
    }
}
