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

//! Shopping cart.
//!
//! A [`Cart`] is a stack: the most recently added item is the one removed by
//! [`Cart::remove_last`]. Billing and display still need purchase order, so
//! every read-only view walks the items oldest-first.
//!
//! # Example
//!
//! ```
//! use priority_checkout::Cart;
//!
//! let mut cart = Cart::new("Ana");
//! cart.add("Milk");
//! cart.add("Bread");
//! assert_eq!(cart.remove_last(), Some("Bread".to_string()));
//! assert_eq!(cart.ordered_snapshot(), vec!["Milk".to_string()]);
//! ```

use std::fmt;

/// Ordered collection of item names belonging to one customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    /// Owning customer, kept for display only.
    owner: String,
    /// Items in insertion order; the top of the stack is the last element.
    items: Vec<String>,
}

impl Cart {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            items: Vec::new(),
        }
    }

    /// Builds a cart from items given in purchase order.
    pub fn with_items<I, S>(owner: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            owner: owner.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Pushes an item on top of the cart. Any text is accepted.
    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Removes the most recently added item.
    ///
    /// Undoing on an empty cart is a no-op and returns `None`.
    pub fn remove_last(&mut self) -> Option<String> {
        self.items.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Oldest-first view over the items.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Returns a copy of the items in chronological order.
    pub fn ordered_snapshot(&self) -> Vec<String> {
        self.items.clone()
    }

    /// Consumes the cart, yielding items oldest-first.
    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
