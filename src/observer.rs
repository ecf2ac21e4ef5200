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

//! Checkout event notifications.
//!
//! The service loop reports progress through a [`CheckoutObserver`]. Every
//! method takes `&self` and returns `()`, so an observer can display events
//! but cannot influence who is served or what is billed.

use crate::billing::Invoice;
use crate::priority::TierReason;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// One-way sink for checkout events. All methods default to doing nothing.
pub trait CheckoutObserver {
    fn customer_admitted(&self, _name: &str, _cart_size: usize) {}

    fn customer_selected(&self, _name: &str, _cart_size: usize, _reason: TierReason) {}

    fn item_priced(&self, _item: &str, _price: Decimal) {}

    fn customer_billed(&self, _name: &str, _total: Decimal) {}

    fn all_served(&self) {}

    fn invoice_reported(&self, _invoice: &Invoice) {}
}

/// Silent observer.
impl CheckoutObserver for () {}

impl<O: CheckoutObserver + ?Sized> CheckoutObserver for &O {
    fn customer_admitted(&self, name: &str, cart_size: usize) {
        (**self).customer_admitted(name, cart_size);
    }

    fn customer_selected(&self, name: &str, cart_size: usize, reason: TierReason) {
        (**self).customer_selected(name, cart_size, reason);
    }

    fn item_priced(&self, item: &str, price: Decimal) {
        (**self).item_priced(item, price);
    }

    fn customer_billed(&self, name: &str, total: Decimal) {
        (**self).customer_billed(name, total);
    }

    fn all_served(&self) {
        (**self).all_served();
    }

    fn invoice_reported(&self, invoice: &Invoice) {
        (**self).invoice_reported(invoice);
    }
}

/// Emits each event as a structured [`tracing`] record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CheckoutObserver for TracingObserver {
    fn customer_admitted(&self, name: &str, cart_size: usize) {
        info!(customer = name, cart_size, "Customer joined the line");
    }

    fn customer_selected(&self, name: &str, cart_size: usize, reason: TierReason) {
        info!(
            customer = name,
            cart_size,
            tier = reason.tier().level(),
            reason = %reason,
            "Serving customer"
        );
    }

    fn item_priced(&self, item: &str, price: Decimal) {
        debug!(item, price = %price, "Item priced");
    }

    fn customer_billed(&self, name: &str, total: Decimal) {
        info!(customer = name, total = %total, "Customer paid");
    }

    fn all_served(&self) {
        info!("All customers served");
    }

    fn invoice_reported(&self, invoice: &Invoice) {
        info!(
            customer = invoice.customer(),
            items = invoice.len(),
            total = %invoice.total(),
            completed_at = %invoice.completed_at().to_rfc3339(),
            "Invoice"
        );
    }
}
