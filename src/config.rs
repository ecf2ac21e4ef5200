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

//! Checkout configuration.

use crate::CheckoutError;
use std::fmt;

/// Inclusive bounds for synthetic item prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    pub const DEFAULT_MIN: u32 = 1_000;
    pub const DEFAULT_MAX: u32 = 20_000;

    /// Creates a price range covering `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidPriceRange`] if `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, CheckoutError> {
        if min > max {
            return Err(CheckoutError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, price: u32) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Runtime settings for a checkout run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Bounds for generated item prices.
    pub prices: PriceRange,
    /// Fixed seed for the price generator; `None` seeds from the OS.
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_matches_reference_prices() {
        let range = PriceRange::default();
        assert_eq!(range.min(), 1_000);
        assert_eq!(range.max(), 20_000);
        assert!(range.contains(1_000));
        assert!(range.contains(20_000));
        assert!(!range.contains(20_001));
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            PriceRange::new(10, 9),
            Err(CheckoutError::InvalidPriceRange { min: 10, max: 9 })
        );
    }

    #[test]
    fn single_value_range_is_valid() {
        let range = PriceRange::new(42, 42).unwrap();
        assert!(range.contains(42));
        assert_eq!(range.to_string(), "42..=42");
    }

    #[test]
    fn default_config_is_unseeded() {
        let config = CheckoutConfig::default();
        assert_eq!(config.prices, PriceRange::default());
        assert_eq!(config.seed, None);
    }
}
