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

//! Customer sources.
//!
//! The checkout accepts any `IntoIterator<Item = Customer>`. This module
//! provides the two sources the binary uses: a fixed demo line and a CSV
//! reader.

use crate::CheckoutError;
use crate::cart::Cart;
use crate::customer::{Customer, PriorityFlags};
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

/// Separator between items in the CSV `items` column.
pub const ITEM_SEPARATOR: char = ';';

/// Built-in demo line: three special-needs customers, one express and one
/// general.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCustomerName`] if an entry has a blank name.
pub fn demo_customers() -> Result<Vec<Customer>, CheckoutError> {
    let line: [(&str, PriorityFlags, &[&str]); 5] = [
        ("Sofía", PriorityFlags::disability(), &["Eggs", "Milk", "Bread"]),
        ("Carlos", PriorityFlags::senior(), &["Coffee", "Cheese", "Whole wheat bread"]),
        ("Marta", PriorityFlags::pregnant(), &["Yogurt", "Apples", "Cookies", "Water"]),
        ("Ana", PriorityFlags::NONE, &["Milk", "Bread", "Eggs"]),
        (
            "Luis",
            PriorityFlags::NONE,
            &["Rice", "Oil", "Sugar", "Lentils", "Cereal", "Toilet paper"],
        ),
    ];

    line.into_iter()
        .map(|(name, flags, items)| {
            Customer::new(name, flags, Cart::with_items(name, items.iter().copied()))
        })
        .collect()
}

/// Raw CSV record matching the customer file format.
///
/// Fields: `name, disability, senior, pregnant, items`
#[derive(Debug, Deserialize)]
struct CsvCustomer {
    name: String,
    disability: bool,
    senior: bool,
    pregnant: bool,
    #[serde(default)]
    items: String,
}

impl CsvCustomer {
    fn into_customer(self) -> Option<Customer> {
        let flags = PriorityFlags {
            disability: self.disability,
            senior: self.senior,
            pregnant: self.pregnant,
        };
        // Only a blank column means an empty cart; blank items are kept.
        let mut cart = Cart::new(self.name.as_str());
        if !self.items.is_empty() {
            for item in self.items.split(ITEM_SEPARATOR) {
                cart.add(item.trim());
            }
        }
        Customer::new(self.name, flags, cart).ok()
    }
}

/// Reads customers from CSV, in file order.
///
/// # CSV Format
///
/// ```csv
/// name,disability,senior,pregnant,items
/// Sofía,true,false,false,Eggs;Milk;Bread
/// Luis,false,false,false,Rice;Oil;Sugar;Lentils;Cereal
/// ```
///
/// Items are listed in purchase order. Every `;`-separated field becomes an
/// item, blank ones included; only an empty `items` column gives an empty
/// cart. Rows that fail to parse, or that have a blank name, are skipped with
/// a warning.
///
/// # Errors
///
/// Returns a CSV error if the header cannot be read.
pub fn read_customers<R: Read>(reader: R) -> Result<Vec<Customer>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    // Surface a broken header instead of silently reading nothing.
    rdr.headers()?;

    let mut customers = Vec::new();
    for (row, result) in rdr.deserialize::<CsvCustomer>().enumerate() {
        match result {
            Ok(record) => match record.into_customer() {
                Some(customer) => customers.push(customer),
                None => warn!(row = row + 1, "Skipping customer with empty name"),
            },
            Err(e) => warn!(row = row + 1, error = %e, "Skipping malformed row"),
        }
    }

    Ok(customers)
}
