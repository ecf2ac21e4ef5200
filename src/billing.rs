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

//! Billing: pricing a cart and producing its invoice.
//!
//! Prices come from a [`PriceSource`]. Production runs use [`UniformPrices`];
//! tests plug in a closure so totals are predictable.
//!
//! # Example
//!
//! ```
//! use priority_checkout::{billing, Cart};
//! use rust_decimal_macros::dec;
//!
//! let cart = Cart::with_items("Ana", ["Milk", "Bread"]);
//! let invoice = billing::process("Ana", cart, &mut || dec!(1500));
//!
//! assert_eq!(invoice.total(), dec!(3000));
//! assert_eq!(invoice.lines()[0].item, "Milk");
//! ```

use crate::cart::Cart;
use crate::config::{CheckoutConfig, PriceRange};
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rust_decimal::Decimal;

/// Supplier of item prices.
pub trait PriceSource {
    /// Returns the price for the next item.
    fn next_price(&mut self) -> Decimal;
}

impl<F> PriceSource for F
where
    F: FnMut() -> Decimal,
{
    fn next_price(&mut self) -> Decimal {
        self()
    }
}

/// Draws whole-unit prices uniformly from a [`PriceRange`].
#[derive(Debug, Clone)]
pub struct UniformPrices {
    range: PriceRange,
    distribution: Uniform<u32>,
    rng: StdRng,
}

impl UniformPrices {
    /// Prices seeded from operating system entropy.
    pub fn new(range: PriceRange) -> Self {
        Self::with_rng(range, StdRng::from_entropy())
    }

    /// Reproducible prices for a fixed seed.
    pub fn seeded(range: PriceRange, seed: u64) -> Self {
        Self::with_rng(range, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &CheckoutConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(config.prices, seed),
            None => Self::new(config.prices),
        }
    }

    fn with_rng(range: PriceRange, rng: StdRng) -> Self {
        Self {
            range,
            distribution: Uniform::new_inclusive(range.min(), range.max()),
            rng,
        }
    }

    pub fn range(&self) -> PriceRange {
        self.range
    }
}

impl PriceSource for UniformPrices {
    fn next_price(&mut self) -> Decimal {
        let price = self.distribution.sample(&mut self.rng);
        debug_assert!(self.range.contains(price), "price {price} outside {}", self.range);
        Decimal::from(price)
    }
}

/// One priced item on an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLine {
    pub item: String,
    pub price: Decimal,
}

/// Immutable record of a completed checkout.
///
/// # Invariants
///
/// - `total` equals the sum of all line prices.
/// - Lines are in purchase order, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    customer: String,
    lines: Vec<InvoiceLine>,
    total: Decimal,
    completed_at: DateTime<Utc>,
}

impl Invoice {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Number of items billed.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Prices every item of `cart` and returns the resulting invoice.
///
/// Consumes the cart so it can only be billed once. An empty cart produces an
/// invoice with no lines and a zero total.
pub fn process<P>(customer: &str, cart: Cart, prices: &mut P) -> Invoice
where
    P: PriceSource + ?Sized,
{
    let lines: Vec<InvoiceLine> = cart
        .into_items()
        .into_iter()
        .map(|item| InvoiceLine {
            item,
            price: prices.next_price(),
        })
        .collect();
    let total = lines.iter().map(|line| line.price).sum();

    Invoice {
        customer: customer.to_string(),
        lines,
        total,
        completed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_cart_bills_zero() {
        let invoice = process("Ana", Cart::new("Ana"), &mut || dec!(999));
        assert!(invoice.is_empty());
        assert_eq!(invoice.total(), Decimal::ZERO);
        assert_eq!(invoice.customer(), "Ana");
    }

    #[test]
    fn total_is_sum_of_lines() {
        let mut next = dec!(100);
        let mut stepping = move || {
            next += dec!(100);
            next
        };
        let cart = Cart::with_items("Luis", ["Rice", "Oil", "Sugar"]);
        let invoice = process("Luis", cart, &mut stepping);

        let prices: Vec<Decimal> = invoice.lines().iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![dec!(200), dec!(300), dec!(400)]);
        assert_eq!(invoice.total(), dec!(900));
    }

    #[test]
    fn lines_follow_purchase_order() {
        let mut cart = Cart::new("Marta");
        cart.add("Yogurt");
        cart.add("Apples");
        cart.add("Cookies");
        cart.add("Water");

        let invoice = process("Marta", cart, &mut || dec!(1));
        let items: Vec<&str> = invoice.lines().iter().map(|l| l.item.as_str()).collect();
        assert_eq!(items, vec!["Yogurt", "Apples", "Cookies", "Water"]);
    }

    #[test]
    fn uniform_prices_stay_in_range() {
        let range = PriceRange::default();
        let mut prices = UniformPrices::seeded(range, 7);
        for _ in 0..1_000 {
            let price = prices.next_price();
            assert!(price >= dec!(1000) && price <= dec!(20000), "out of range: {price}");
        }
    }

    #[test]
    fn draws_fall_within_configured_range() {
        let range = PriceRange::new(10, 20).unwrap();
        let mut prices = UniformPrices::seeded(range, 3);
        assert_eq!(prices.range(), range);
        for _ in 0..200 {
            let price = prices.next_price().to_u32().unwrap();
            assert!(prices.range().contains(price), "out of range: {price}");
        }
    }

    #[test]
    fn single_value_range_is_constant() {
        let mut prices = UniformPrices::new(PriceRange::new(5, 5).unwrap());
        assert_eq!(prices.next_price(), dec!(5));
        assert_eq!(prices.next_price(), dec!(5));
    }

    #[test]
    fn same_seed_same_prices() {
        let config = CheckoutConfig {
            prices: PriceRange::default(),
            seed: Some(42),
        };
        let mut a = UniformPrices::from_config(&config);
        let mut b = UniformPrices::from_config(&config);
        for _ in 0..16 {
            assert_eq!(a.next_price(), b.next_price());
        }
    }
}
