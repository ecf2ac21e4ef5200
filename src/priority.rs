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

//! Priority tiers and the service ordering.
//!
//! A customer's tier is derived from their flags and cart size:
//!
//! | Tier | Condition |
//! |------|-----------|
//! | [`Tier::SpecialNeeds`] | any priority flag is set |
//! | [`Tier::Express`] | no flag, fewer than [`EXPRESS_ITEM_LIMIT`] items |
//! | [`Tier::General`] | everyone else |
//!
//! Higher tiers are served first. Inside a tier the earlier arrival wins,
//! so [`PriorityKey`] is a total order and no two queued customers tie.

use crate::base::ArrivalSeq;
use crate::customer::Customer;
use std::cmp::Ordering;
use std::fmt;

/// Carts strictly smaller than this qualify for the express tier.
pub const EXPRESS_ITEM_LIMIT: usize = 5;

/// Coarse priority class. Variant order is service order, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    General = 1,
    Express = 2,
    SpecialNeeds = 3,
}

impl Tier {
    /// Computes the tier of a customer.
    pub fn of(customer: &Customer) -> Self {
        if customer.flags().any() {
            Tier::SpecialNeeds
        } else if customer.cart().len() < EXPRESS_ITEM_LIMIT {
            Tier::Express
        } else {
            Tier::General
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::General => "general",
            Tier::Express => "express",
            Tier::SpecialNeeds => "special needs",
        };
        f.write_str(label)
    }
}

/// Why a customer landed in their tier, for the selection notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierReason {
    Disability,
    Senior,
    Pregnant,
    SmallCart,
    General,
}

impl TierReason {
    /// Reports the first matching flag, checked as disability, senior, pregnant.
    pub fn of(customer: &Customer) -> Self {
        let flags = customer.flags();
        if flags.disability {
            TierReason::Disability
        } else if flags.senior {
            TierReason::Senior
        } else if flags.pregnant {
            TierReason::Pregnant
        } else if customer.cart().len() < EXPRESS_ITEM_LIMIT {
            TierReason::SmallCart
        } else {
            TierReason::General
        }
    }

    pub fn tier(self) -> Tier {
        match self {
            TierReason::Disability | TierReason::Senior | TierReason::Pregnant => {
                Tier::SpecialNeeds
            }
            TierReason::SmallCart => Tier::Express,
            TierReason::General => Tier::General,
        }
    }
}

impl fmt::Display for TierReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TierReason::Disability => "disability",
            TierReason::Senior => "senior",
            TierReason::Pregnant => "pregnant",
            TierReason::SmallCart => "small cart",
            TierReason::General => "general",
        };
        f.write_str(label)
    }
}

/// Service ordering key. `a > b` means `a` is served before `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriorityKey {
    pub tier: Tier,
    pub arrival: ArrivalSeq,
}

impl PriorityKey {
    pub fn new(customer: &Customer, arrival: ArrivalSeq) -> Self {
        Self {
            tier: Tier::of(customer),
            arrival,
        }
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earlier arrival ranks higher, hence the reversed comparison.
        self.tier
            .cmp(&other.tier)
            .then_with(|| other.arrival.cmp(&self.arrival))
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cart, PriorityFlags};

    fn customer(flags: PriorityFlags, items: usize) -> Customer {
        let cart = Cart::with_items("c", (0..items).map(|i| format!("item-{i}")));
        Customer::new("c", flags, cart).unwrap()
    }

    fn key(tier: Tier, arrival: u64) -> PriorityKey {
        PriorityKey {
            tier,
            arrival: ArrivalSeq(arrival),
        }
    }

    #[test]
    fn express_boundary_is_exclusive() {
        assert_eq!(Tier::of(&customer(PriorityFlags::NONE, 0)), Tier::Express);
        assert_eq!(Tier::of(&customer(PriorityFlags::NONE, 4)), Tier::Express);
        assert_eq!(Tier::of(&customer(PriorityFlags::NONE, 5)), Tier::General);
        assert_eq!(Tier::of(&customer(PriorityFlags::NONE, 12)), Tier::General);
    }

    #[test]
    fn any_flag_is_special_needs_regardless_of_cart() {
        assert_eq!(Tier::of(&customer(PriorityFlags::senior(), 20)), Tier::SpecialNeeds);
        assert_eq!(Tier::of(&customer(PriorityFlags::pregnant(), 0)), Tier::SpecialNeeds);
        let all = PriorityFlags {
            disability: true,
            senior: true,
            pregnant: true,
        };
        assert_eq!(Tier::of(&customer(all, 8)), Tier::SpecialNeeds);
    }

    #[test]
    fn tier_levels() {
        assert_eq!(Tier::SpecialNeeds.level(), 3);
        assert_eq!(Tier::Express.level(), 2);
        assert_eq!(Tier::General.level(), 1);
    }

    #[test]
    fn reason_reports_first_flag() {
        let flags = PriorityFlags {
            disability: false,
            senior: true,
            pregnant: true,
        };
        assert_eq!(TierReason::of(&customer(flags, 1)), TierReason::Senior);
        assert_eq!(TierReason::of(&customer(PriorityFlags::NONE, 3)), TierReason::SmallCart);
        assert_eq!(TierReason::of(&customer(PriorityFlags::NONE, 5)), TierReason::General);
    }

    #[test]
    fn reason_agrees_with_tier() {
        for flags in [PriorityFlags::NONE, PriorityFlags::disability(), PriorityFlags::pregnant()] {
            for items in 0..8 {
                let c = customer(flags, items);
                assert_eq!(TierReason::of(&c).tier(), Tier::of(&c));
            }
        }
    }

    #[test]
    fn higher_tier_wins_over_arrival() {
        assert!(key(Tier::SpecialNeeds, 9) > key(Tier::Express, 0));
        assert!(key(Tier::Express, 9) > key(Tier::General, 0));
    }

    #[test]
    fn earlier_arrival_wins_within_tier() {
        assert!(key(Tier::Express, 0) > key(Tier::Express, 1));
        assert_eq!(key(Tier::General, 3).cmp(&key(Tier::General, 3)), Ordering::Equal);
    }
}
