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

//! Checkout service loop.
//!
//! [`Checkout`] owns the service queue, the invoice ledger and the price
//! source for one run. Customers are admitted, then served in priority order
//! until the line is empty:
//!
//! ```text
//! admit ──► ServiceQueue ──remove_highest──► billing::process ──► InvoiceLedger
//!                                                   │
//!                                                   └──► CheckoutObserver
//! ```
//!
//! # Concurrency
//!
//! Admission takes `&self` and goes through a single [`Mutex`], which keeps
//! arrival numbers gap-free even when callers admit from several threads.
//! Serving takes `&mut self`, so nobody can join the line mid-service.

use crate::CheckoutError;
use crate::base::ArrivalSeq;
use crate::billing::{self, Invoice, PriceSource, UniformPrices};
use crate::config::CheckoutConfig;
use crate::customer::Customer;
use crate::ledger::InvoiceLedger;
use crate::observer::{CheckoutObserver, TracingObserver};
use crate::priority::TierReason;
use crate::service_queue::ServiceQueue;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::debug;

/// Outcome of serving one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Served {
    pub arrival: ArrivalSeq,
    pub customer: String,
    pub reason: TierReason,
    pub items: usize,
    pub total: Decimal,
}

/// Totals for a complete service run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceSummary {
    pub customers: usize,
    pub grand_total: Decimal,
}

/// Service loop context for a single checkout line.
pub struct Checkout<P = UniformPrices, O = TracingObserver> {
    queue: Mutex<ServiceQueue>,
    ledger: InvoiceLedger,
    prices: P,
    observer: O,
}

impl Checkout {
    /// Creates a checkout with uniform random prices and tracing output.
    pub fn new(config: &CheckoutConfig) -> Self {
        Self::with_parts(UniformPrices::from_config(config), TracingObserver)
    }
}

impl<P, O> Checkout<P, O>
where
    P: PriceSource,
    O: CheckoutObserver,
{
    pub fn with_parts(prices: P, observer: O) -> Self {
        Self {
            queue: Mutex::new(ServiceQueue::new()),
            ledger: InvoiceLedger::new(),
            prices,
            observer,
        }
    }

    /// Puts a customer in line and returns their arrival number.
    pub fn admit(&self, customer: Customer) -> ArrivalSeq {
        let name = customer.name().to_string();
        let cart_size = customer.cart().len();

        // Notify under the lock so admission events follow arrival order.
        let mut queue = self.queue.lock();
        let arrival = queue.enqueue(customer);
        self.observer.customer_admitted(&name, cart_size);
        arrival
    }

    /// Admits every customer from `source`, in order. Returns how many joined.
    pub fn admit_all<I>(&self, source: I) -> usize
    where
        I: IntoIterator<Item = Customer>,
    {
        source
            .into_iter()
            .map(|customer| self.admit(customer))
            .count()
    }

    /// Number of customers still waiting.
    pub fn waiting(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// Serves the highest-priority customer: bills their cart and records
    /// the invoice.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyQueue`] if nobody is waiting.
    pub fn serve_next(&mut self) -> Result<Served, CheckoutError> {
        let selected = self.queue.get_mut().remove_highest()?;
        let arrival = selected.arrival();
        let reason = selected.reason();
        let (name, cart) = selected.into_customer().into_parts();
        let items = cart.len();

        self.observer.customer_selected(&name, items, reason);
        let invoice = billing::process(&name, cart, &mut self.prices);
        for line in invoice.lines() {
            self.observer.item_priced(&line.item, line.price);
        }
        let total = invoice.total();
        debug_assert_eq!(invoice.len(), items);

        self.ledger.append(invoice);
        self.observer.customer_billed(&name, total);

        Ok(Served {
            arrival,
            customer: name,
            reason,
            items,
            total,
        })
    }

    /// Serves customers until the line is empty.
    pub fn serve_all(&mut self) -> Result<ServiceSummary, CheckoutError> {
        let mut summary = ServiceSummary::default();
        while !self.queue.get_mut().is_empty() {
            let served = self.serve_next()?;
            debug!(
                arrival = %served.arrival,
                customer = %served.customer,
                "Checkout complete"
            );
            summary.customers += 1;
            summary.grand_total += served.total;
        }
        self.observer.all_served();
        Ok(summary)
    }

    pub fn ledger(&self) -> &InvoiceLedger {
        &self.ledger
    }

    /// Drains the ledger, reporting each invoice to the observer in service
    /// order.
    pub fn report_invoices(&self) -> Vec<Invoice> {
        let invoices = self.ledger.drain_all();
        for invoice in &invoices {
            self.observer.invoice_reported(invoice);
        }
        invoices
    }
}
