//! Manager incentive calculator
//!
//! Managers are paid per net sale at a rate looked up from a productivity
//! slab crossed with a team-size category. Referral sales pay at half rate,
//! and a gross-to-net (GTN) ratio below 80% triggers a 20% penalty on the
//! gross incentive.

use crate::rounding::floor_to_two_decimals;
use crate::slab::{self, Slab};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Manager slab table from the incentive policy sheet.
///
/// Ordered by descending productivity threshold; below 0.80 is ineligible and
/// anything at or above 1.21 lands in the top slab. Rates are per net sale,
/// one column per team category (5-8, 9-12, 13+).
const MANAGER_SLABS: [Slab<f64, [f64; 3]>; 7] = [
    Slab { threshold: 1.21, label: "1.21-1.30", rate: [12_000.0, 15_000.0, 20_000.0] },
    Slab { threshold: 1.11, label: "1.11-1.20", rate: [10_000.0, 13_000.0, 15_000.0] },
    Slab { threshold: 1.01, label: "1.01-1.10", rate: [8_000.0, 11_000.0, 13_000.0] },
    Slab { threshold: 0.96, label: "0.96-1.00", rate: [7_000.0, 9_500.0, 11_500.0] },
    Slab { threshold: 0.91, label: "0.91-0.95", rate: [6_000.0, 8_000.0, 10_000.0] },
    Slab { threshold: 0.86, label: "0.86-0.90", rate: [5_000.0, 6_500.0, 8_500.0] },
    Slab { threshold: 0.80, label: "0.80-0.85", rate: [4_000.0, 5_000.0, 7_000.0] },
];

/// Minimum frozen team size for any manager payout
const MIN_TEAM_SIZE: u32 = 5;

/// GTN percentage below which the penalty applies
const GTN_PENALTY_THRESHOLD: f64 = 80.0;

/// Penalty as a fraction of gross incentive
const PENALTY_RATE: f64 = 0.2;

/// Referral sales pay at this fraction of the slab rate
const REFERRAL_MULTIPLIER: f64 = 0.5;

/// Team-size category, one rate column in the slab table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamCategory {
    #[serde(rename = "5-8")]
    Size5To8,
    #[serde(rename = "9-12")]
    Size9To12,
    #[serde(rename = "13+")]
    Size13Plus,
}

impl TeamCategory {
    /// Categorize a frozen team size. Sizes below 5 are rejected before this
    /// is called, so the bottom category is the fallback.
    fn from_team_size(team_size: u32) -> Self {
        if team_size >= 13 {
            TeamCategory::Size13Plus
        } else if team_size >= 9 {
            TeamCategory::Size9To12
        } else {
            TeamCategory::Size5To8
        }
    }

    /// Column index into the slab rate arrays
    fn rate_column(self) -> usize {
        match self {
            TeamCategory::Size5To8 => 0,
            TeamCategory::Size9To12 => 1,
            TeamCategory::Size13Plus => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TeamCategory::Size5To8 => "5-8",
            TeamCategory::Size9To12 => "9-12",
            TeamCategory::Size13Plus => "13+",
        }
    }
}

impl fmt::Display for TeamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frozen cohort numbers for one manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerInput {
    /// Team headcount frozen at cohort start (non-probation members)
    pub frozen_team_size: u32,

    /// Length of the evaluation cohort in weeks (fixed at 4 in current policy)
    pub cohort_weeks: u32,

    /// Gross sales before cancellations and discount reversals
    pub gross_sales: u32,

    /// Net sales after cancellations
    pub net_sales: u32,

    /// Net sales at full price
    pub non_discounted_net_sales: u32,

    /// Net sales closed with a manager-issued coupon
    pub manager_coupon_net_sales: u32,

    /// Net sales attributed to referrals (paid at half rate)
    pub referral_net_sales: u32,
}

/// Computed manager payout, one fresh value per calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerResult {
    pub eligible: bool,

    /// Net sales per team member per week, floored to 2 decimals
    pub net_productivity: f64,

    pub team_category: TeamCategory,

    /// Matched productivity slab name, empty when ineligible
    pub slab_label: String,

    pub incentive_per_sale: f64,

    /// Non-discounted component
    pub breakdown_a: f64,
    /// Manager-coupon component
    pub breakdown_b: f64,
    /// Referral component (half rate)
    pub breakdown_c: f64,

    pub gross_incentive: f64,

    /// Net-to-gross sales ratio as a percentage, floored to 2 decimals
    pub gtn_percent: f64,

    pub penalty_applied: bool,
    pub penalty_amount: f64,
    pub final_incentive: f64,

    /// Explanation when ineligible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn ineligible(
    net_productivity: f64,
    team_category: TeamCategory,
    message: &str,
) -> ManagerResult {
    ManagerResult {
        eligible: false,
        net_productivity,
        team_category,
        slab_label: String::new(),
        incentive_per_sale: 0.0,
        breakdown_a: 0.0,
        breakdown_b: 0.0,
        breakdown_c: 0.0,
        gross_incentive: 0.0,
        gtn_percent: 0.0,
        penalty_applied: false,
        penalty_amount: 0.0,
        final_incentive: 0.0,
        message: Some(message.to_string()),
    }
}

/// Calculate the manager incentive for one cohort.
///
/// Pure and total: never fails, ineligibility comes back as
/// `eligible: false` with a message. The team-size gate zeroes the whole
/// record; the productivity gate still reports the computed productivity
/// and team category.
pub fn calculate_manager_incentive(input: &ManagerInput) -> ManagerResult {
    if input.frozen_team_size < MIN_TEAM_SIZE {
        return ineligible(
            0.0,
            TeamCategory::Size5To8,
            "Not eligible: Team size must be at least 5 (non-probation members)",
        );
    }

    // Average net sales per team member per week, truncated at 2 decimals.
    let raw_productivity =
        input.net_sales as f64 / input.frozen_team_size as f64 / input.cohort_weeks as f64;
    let net_productivity = floor_to_two_decimals(raw_productivity);

    let team_category = TeamCategory::from_team_size(input.frozen_team_size);

    let Some(matched) = slab::lookup(&MANAGER_SLABS, net_productivity) else {
        return ineligible(
            net_productivity,
            team_category,
            "Not eligible: Net productivity must be at least 0.80",
        );
    };
    let incentive_per_sale = matched.rate[team_category.rate_column()];

    log::debug!(
        "manager slab {} matched for productivity={} category={} (rate {})",
        matched.label,
        net_productivity,
        team_category,
        incentive_per_sale
    );

    let breakdown_a = input.non_discounted_net_sales as f64 * incentive_per_sale;
    let breakdown_b = input.manager_coupon_net_sales as f64 * incentive_per_sale;
    let breakdown_c = input.referral_net_sales as f64 * (REFERRAL_MULTIPLIER * incentive_per_sale);
    let gross_incentive = breakdown_a + breakdown_b + breakdown_c;

    let gtn_percent = if input.gross_sales > 0 {
        floor_to_two_decimals(input.net_sales as f64 / input.gross_sales as f64 * 100.0)
    } else {
        0.0
    };

    let mut penalty_applied = false;
    let mut penalty_amount = 0.0;
    let mut final_incentive = gross_incentive;

    if gtn_percent < GTN_PENALTY_THRESHOLD {
        penalty_applied = true;
        penalty_amount = floor_to_two_decimals(PENALTY_RATE * gross_incentive);
        final_incentive = gross_incentive - penalty_amount;
    }

    // Each breakdown term is floored independently, then the sum; the order
    // matters for reproducing policy-sheet figures exactly.
    ManagerResult {
        eligible: true,
        net_productivity,
        team_category,
        slab_label: matched.label.to_string(),
        incentive_per_sale,
        breakdown_a: floor_to_two_decimals(breakdown_a),
        breakdown_b: floor_to_two_decimals(breakdown_b),
        breakdown_c: floor_to_two_decimals(breakdown_c),
        gross_incentive: floor_to_two_decimals(gross_incentive),
        gtn_percent,
        penalty_applied,
        penalty_amount,
        final_incentive: floor_to_two_decimals(final_incentive),
        message: None,
    }
}
