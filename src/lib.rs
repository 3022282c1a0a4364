//! Sales incentive calculation engine
//!
//! Computes cohort payouts for two roles from frozen sales numbers:
//! - **IC** (individual contributor): net-sales slab lookup plus flat
//!   referral and manager-coupon add-ons, with a probation override.
//! - **Manager**: productivity-based slab lookup over a team-size rate
//!   table, weighted breakdown, and a gross-to-net penalty rule.
//!
//! Both calculators are pure and total: every validated input produces a
//! result record, and ineligibility is a normal return (`eligible: false`
//! with a message), never an error.

pub mod format;
pub mod ic;
pub mod manager;
pub mod rounding;
pub mod slab;
pub mod validation;

pub use ic::{calculate_ic_incentive, EmploymentStatus, IcInput, IcResult};
pub use manager::{calculate_manager_incentive, ManagerInput, ManagerResult, TeamCategory};
pub use rounding::floor_to_two_decimals;
pub use validation::{validate_ic_input, validate_manager_input, ValidationError};
