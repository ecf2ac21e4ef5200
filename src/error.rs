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

//! Error types for checkout processing.

use thiserror::Error;

/// Checkout processing errors.
///
/// Every variant is a precondition violation. None of them are retried; the
/// binary aborts the run with the rendered message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// A customer was requested from a queue with nobody waiting
    #[error("no customers waiting in the service queue")]
    EmptyQueue,

    /// Customer name is empty or only whitespace
    #[error("customer name must not be empty")]
    EmptyCustomerName,

    /// Lower price bound exceeds the upper bound
    #[error("invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: u32, max: u32 },
}
