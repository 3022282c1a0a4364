//! Individual contributor (IC) incentive calculator
//!
//! Non-probation ICs are paid a slab rate per non-discounted sale based on
//! total net sales for the 4-week cohort, plus flat add-ons for referral and
//! manager-coupon sales. Probation ICs are paid a fixed rate on
//! non-discounted sales only.

use crate::slab::{self, Slab};
use serde::{Deserialize, Serialize};

/// IC slab table (non-probation), from the incentive policy sheet.
/// Ordered by descending net-sales threshold; below 4 is ineligible.
const IC_SLABS: [Slab<u32, f64>; 8] = [
    Slab { threshold: 18, label: "18+", rate: 30_000.0 },
    Slab { threshold: 16, label: "16-17", rate: 27_500.0 },
    Slab { threshold: 14, label: "14-15", rate: 25_000.0 },
    Slab { threshold: 12, label: "12-13", rate: 22_500.0 },
    Slab { threshold: 10, label: "10-11", rate: 20_000.0 },
    Slab { threshold: 8, label: "8-9", rate: 17_500.0 },
    Slab { threshold: 6, label: "6-7", rate: 15_000.0 },
    Slab { threshold: 4, label: "4-5", rate: 12_500.0 },
];

/// Flat rate per non-discounted sale while on probation
const PROBATION_INCENTIVE_PER_SALE: f64 = 5_000.0;

/// Flat rate per referral sale, independent of slab
const REFERRAL_FLAT_INCENTIVE: f64 = 5_000.0;

/// Flat rate per manager-coupon sale, independent of slab
const MANAGER_COUPON_FLAT_INCENTIVE: f64 = 10_000.0;

/// Employment status of an IC at cohort freeze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Probation,
    #[serde(rename = "Non-Probation")]
    NonProbation,
}

/// Frozen cohort numbers for one IC
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcInput {
    pub employment_status: EmploymentStatus,

    /// Length of the evaluation cohort in weeks (fixed at 4 in current policy)
    pub cohort_weeks: u32,

    /// Total net sales over the cohort
    pub net_sales: u32,

    /// Net sales at full price (no discount applied)
    pub non_discounted_net_sales: u32,

    /// Sales attributed to referrals
    pub referral_sales_count: u32,

    /// Sales closed with a manager-issued coupon
    pub manager_coupon_sales_count: u32,
}

/// Computed IC payout, one fresh value per calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcResult {
    pub eligible: bool,

    /// Net sales echoed back from the input
    pub net_sales: u32,

    /// Matched slab name, "Probation", or empty when ineligible
    pub slab_label: String,

    pub incentive_per_non_discounted_sale: f64,
    pub non_discounted_incentive: f64,
    pub referral_incentive: f64,
    pub manager_coupon_incentive: f64,
    pub total_incentive: f64,

    /// Explanation when ineligible or in probation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Calculate the IC incentive for one cohort.
///
/// Pure and total: never fails, ineligibility comes back as
/// `eligible: false` with zeroed monetary fields and a message.
pub fn calculate_ic_incentive(input: &IcInput) -> IcResult {
    // Probation pays a flat rate on non-discounted sales only; referral and
    // manager-coupon counts are not incentivized regardless of value.
    if input.employment_status == EmploymentStatus::Probation {
        let non_discounted_incentive =
            input.non_discounted_net_sales as f64 * PROBATION_INCENTIVE_PER_SALE;

        return IcResult {
            eligible: true,
            net_sales: input.net_sales,
            slab_label: "Probation".to_string(),
            incentive_per_non_discounted_sale: PROBATION_INCENTIVE_PER_SALE,
            non_discounted_incentive,
            referral_incentive: 0.0,
            manager_coupon_incentive: 0.0,
            total_incentive: non_discounted_incentive,
            message: Some("Probation: Only non-discounted net sales are incentivized".to_string()),
        };
    }

    let Some(matched) = slab::lookup(&IC_SLABS, input.net_sales) else {
        return IcResult {
            eligible: false,
            net_sales: input.net_sales,
            slab_label: String::new(),
            incentive_per_non_discounted_sale: 0.0,
            non_discounted_incentive: 0.0,
            referral_incentive: 0.0,
            manager_coupon_incentive: 0.0,
            total_incentive: 0.0,
            message: Some(
                "Not eligible: Net sales must be at least 4 for the 4-week cohort".to_string(),
            ),
        };
    };

    log::debug!(
        "IC slab {} matched for net_sales={} (rate {})",
        matched.label,
        input.net_sales,
        matched.rate
    );

    let non_discounted_incentive = input.non_discounted_net_sales as f64 * matched.rate;
    let referral_incentive = input.referral_sales_count as f64 * REFERRAL_FLAT_INCENTIVE;
    let manager_coupon_incentive =
        input.manager_coupon_sales_count as f64 * MANAGER_COUPON_FLAT_INCENTIVE;

    IcResult {
        eligible: true,
        net_sales: input.net_sales,
        slab_label: matched.label.to_string(),
        incentive_per_non_discounted_sale: matched.rate,
        non_discounted_incentive,
        referral_incentive,
        manager_coupon_incentive,
        total_incentive: non_discounted_incentive + referral_incentive + manager_coupon_incentive,
        message: None,
    }
}
