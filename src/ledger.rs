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

//! Invoice ledger.
//!
//! Append-only FIFO record of completed checkouts, drained once at the end of
//! a run for reporting.

use crate::billing::Invoice;
use crossbeam::queue::SegQueue;

/// FIFO store of invoices in service order.
///
/// Backed by a lock-free [`SegQueue`], so appends are O(1) and take `&self`.
/// Entries are not indexed by customer; repeated names stay separate.
#[derive(Debug, Default)]
pub struct InvoiceLedger {
    invoices: SegQueue<Invoice>,
}

impl InvoiceLedger {
    pub fn new() -> Self {
        Self {
            invoices: SegQueue::new(),
        }
    }

    pub fn append(&self, invoice: Invoice) {
        self.invoices.push(invoice);
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Removes every invoice, oldest first.
    pub fn drain_all(&self) -> Vec<Invoice> {
        let mut drained = Vec::with_capacity(self.invoices.len());
        while let Some(invoice) = self.invoices.pop() {
            drained.push(invoice);
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cart, billing};
    use rust_decimal_macros::dec;

    fn invoice(name: &str) -> Invoice {
        billing::process(name, Cart::with_items(name, ["Bread"]), &mut || dec!(1000))
    }

    #[test]
    fn drain_is_fifo() {
        let ledger = InvoiceLedger::new();
        ledger.append(invoice("Sofia"));
        ledger.append(invoice("Ana"));
        ledger.append(invoice("Luis"));
        assert_eq!(ledger.len(), 3);

        let names: Vec<String> = ledger
            .drain_all()
            .iter()
            .map(|i| i.customer().to_string())
            .collect();
        assert_eq!(names, vec!["Sofia", "Ana", "Luis"]);
        assert!(ledger.is_empty());
    }

    #[test]
    fn duplicate_names_are_kept() {
        let ledger = InvoiceLedger::new();
        ledger.append(invoice("Ana"));
        ledger.append(invoice("Ana"));
        assert_eq!(ledger.drain_all().len(), 2);
    }

    #[test]
    fn drain_empty_ledger() {
        let ledger = InvoiceLedger::new();
        assert!(ledger.drain_all().is_empty());
    }
}
