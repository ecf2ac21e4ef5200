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

//! # Priority Checkout
//!
//! This library simulates a retail checkout line that serves customers out of
//! arrival order according to a priority policy, then bills each served
//! customer exactly once and keeps the invoice.
//!
//! ## Core Components
//!
//! - [`Cart`]: LIFO collection of a customer's items
//! - [`Customer`]: Name, [`PriorityFlags`] and owned cart
//! - [`Tier`] / [`PriorityKey`]: The service ordering
//! - [`ServiceQueue`]: Priority heap with FIFO tie-break inside a tier
//! - [`billing`]: Prices a cart and produces an [`Invoice`]
//! - [`InvoiceLedger`]: FIFO record of completed checkouts
//! - [`Checkout`]: Service loop tying everything together
//!
//! ## Example
//!
//! ```
//! use priority_checkout::{Cart, Checkout, Customer, PriorityFlags};
//! use rust_decimal_macros::dec;
//!
//! let mut checkout = Checkout::with_parts(|| dec!(1000), ());
//!
//! let luis = Cart::with_items("Luis", ["Rice", "Oil", "Sugar", "Lentils", "Cereal"]);
//! checkout.admit(Customer::new("Luis", PriorityFlags::NONE, luis).unwrap());
//!
//! let sofia = Cart::with_items("Sofía", ["Eggs"]);
//! checkout.admit(Customer::new("Sofía", PriorityFlags::disability(), sofia).unwrap());
//!
//! // Sofía arrived later but has priority.
//! let served = checkout.serve_next().unwrap();
//! assert_eq!(served.customer, "Sofía");
//! assert_eq!(served.total, dec!(1000));
//! ```
//!
//! ## Threading
//!
//! The run itself is single-threaded. Admission is serialized through a mutex,
//! so several threads may feed the same line without breaking arrival order.

mod base;
pub mod billing;
mod cart;
mod checkout;
pub mod config;
mod customer;
pub mod error;
mod ledger;
pub mod observer;
mod priority;
pub mod report;
mod service_queue;
pub mod source;

pub use base::ArrivalSeq;
pub use billing::{Invoice, InvoiceLine, PriceSource, UniformPrices};
pub use cart::Cart;
pub use checkout::{Checkout, ServiceSummary, Served};
pub use config::{CheckoutConfig, PriceRange};
pub use customer::{Customer, PriorityFlags};
pub use error::CheckoutError;
pub use ledger::InvoiceLedger;
pub use observer::{CheckoutObserver, TracingObserver};
pub use priority::{EXPRESS_ITEM_LIMIT, PriorityKey, Tier, TierReason};
pub use service_queue::{QueuedCustomer, ServiceQueue};
