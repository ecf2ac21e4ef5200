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

//! Customer records.

use crate::CheckoutError;
use crate::cart::Cart;

/// Priority attributes of a customer.
///
/// The flags are independent; any combination is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PriorityFlags {
    pub disability: bool,
    pub senior: bool,
    pub pregnant: bool,
}

impl PriorityFlags {
    pub const NONE: Self = Self {
        disability: false,
        senior: false,
        pregnant: false,
    };

    pub fn disability() -> Self {
        Self {
            disability: true,
            ..Self::NONE
        }
    }

    pub fn senior() -> Self {
        Self {
            senior: true,
            ..Self::NONE
        }
    }

    pub fn pregnant() -> Self {
        Self {
            pregnant: true,
            ..Self::NONE
        }
    }

    /// Returns `true` if at least one flag is set.
    pub fn any(&self) -> bool {
        self.disability || self.senior || self.pregnant
    }
}

/// A customer waiting to check out, together with their cart.
///
/// Fields are private: once a customer is built the only way to change the
/// cart is through the owned value, which the service queue never hands out
/// mutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    flags: PriorityFlags,
    cart: Cart,
}

impl Customer {
    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCustomerName`] if `name` is blank.
    pub fn new(
        name: impl Into<String>,
        flags: PriorityFlags,
        cart: Cart,
    ) -> Result<Self, CheckoutError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CheckoutError::EmptyCustomerName);
        }
        Ok(Self { name, flags, cart })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> PriorityFlags {
        self.flags
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Splits the customer into name and cart for billing.
    pub fn into_parts(self) -> (String, Cart) {
        (self.name, self.cart)
    }
}
