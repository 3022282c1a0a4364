//! Upstream input validation
//!
//! The calculators are total functions over validated input and do not
//! re-check these rules themselves; callers run the input through this
//! layer first and surface violations on their own error channel.
//! Non-negativity is structural (all counts are unsigned).

use crate::ic::IcInput;
use crate::manager::ManagerInput;
use thiserror::Error;

/// A single violated input rule, attributed to the field to highlight
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Check the IC input contract. Collects every violated rule rather than
/// stopping at the first.
pub fn validate_ic_input(input: &IcInput) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if input.cohort_weeks == 0 {
        errors.push(ValidationError::new(
            "cohort_weeks",
            "Cohort weeks must be positive",
        ));
    }

    let component_sum = input.non_discounted_net_sales
        + input.referral_sales_count
        + input.manager_coupon_sales_count;
    if component_sum > input.net_sales {
        errors.push(ValidationError::new(
            "non_discounted_net_sales",
            "Sum of non-discounted, referral, and manager coupon sales cannot exceed net sales",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check the manager input contract. Collects every violated rule rather
/// than stopping at the first.
pub fn validate_manager_input(input: &ManagerInput) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if input.cohort_weeks == 0 {
        errors.push(ValidationError::new(
            "cohort_weeks",
            "Cohort weeks must be positive",
        ));
    }

    if input.net_sales > input.gross_sales {
        errors.push(ValidationError::new(
            "net_sales",
            "Net sales cannot exceed gross sales",
        ));
    }

    let component_sum = input.non_discounted_net_sales
        + input.manager_coupon_net_sales
        + input.referral_net_sales;
    if component_sum > input.net_sales {
        errors.push(ValidationError::new(
            "non_discounted_net_sales",
            "Sum of non-discounted, manager coupon, and referral sales cannot exceed net sales",
        ));
    }

    if input.net_sales > 0 && input.gross_sales == 0 {
        errors.push(ValidationError::new(
            "gross_sales",
            "Gross sales must be greater than 0 if net sales is greater than 0",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ic::EmploymentStatus;

    fn valid_ic() -> IcInput {
        IcInput {
            employment_status: EmploymentStatus::NonProbation,
            cohort_weeks: 4,
            net_sales: 10,
            non_discounted_net_sales: 5,
            referral_sales_count: 3,
            manager_coupon_sales_count: 2,
        }
    }

    fn valid_manager() -> ManagerInput {
        ManagerInput {
            frozen_team_size: 9,
            cohort_weeks: 4,
            gross_sales: 42,
            net_sales: 37,
            non_discounted_net_sales: 18,
            manager_coupon_net_sales: 12,
            referral_net_sales: 7,
        }
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(validate_ic_input(&valid_ic()).is_ok());
        assert!(validate_manager_input(&valid_manager()).is_ok());
    }

    #[test]
    fn test_ic_component_sum_rule() {
        let input = IcInput {
            net_sales: 9, // components sum to 10
            ..valid_ic()
        };
        let errors = validate_ic_input(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "non_discounted_net_sales");
    }

    #[test]
    fn test_ic_zero_cohort_weeks() {
        let input = IcInput {
            cohort_weeks: 0,
            ..valid_ic()
        };
        let errors = validate_ic_input(&input).unwrap_err();
        assert_eq!(errors[0].field, "cohort_weeks");
    }

    #[test]
    fn test_manager_net_exceeds_gross() {
        let input = ManagerInput {
            gross_sales: 30,
            ..valid_manager()
        };
        let errors = validate_manager_input(&input).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "net_sales"));
    }

    #[test]
    fn test_manager_zero_gross_with_positive_net() {
        let input = ManagerInput {
            gross_sales: 0,
            ..valid_manager()
        };
        let errors = validate_manager_input(&input).unwrap_err();
        // Also trips net > gross; both rules are reported
        assert!(errors.iter().any(|e| e.field == "gross_sales"));
        assert!(errors.iter().any(|e| e.field == "net_sales"));
    }

    #[test]
    fn test_manager_component_sum_rule() {
        let input = ManagerInput {
            non_discounted_net_sales: 38, // alone exceeds net_sales of 37
            manager_coupon_net_sales: 0,
            referral_net_sales: 0,
            ..valid_manager()
        };
        let errors = validate_manager_input(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "non_discounted_net_sales");
    }

    #[test]
    fn test_zero_sales_manager_is_valid() {
        let input = ManagerInput {
            gross_sales: 0,
            net_sales: 0,
            non_discounted_net_sales: 0,
            manager_coupon_net_sales: 0,
            referral_net_sales: 0,
            ..valid_manager()
        };
        assert!(validate_manager_input(&input).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new("net_sales", "Net sales cannot exceed gross sales");
        assert_eq!(
            err.to_string(),
            "net_sales: Net sales cannot exceed gross sales"
        );
    }
}
