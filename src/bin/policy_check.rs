//! Compare calculator output with the incentive policy sheet's worked examples
//!
//! Scenario 1: team 9, gross 42, net 37 (18 ND / 12 coupon / 7 referral)
//! Scenario 2: team 8, gross 38, net 30 (7 ND / 20 coupon / 3 referral), GTN penalty

use incentive_system::{calculate_manager_incentive, ManagerInput};

struct Scenario {
    name: &'static str,
    input: ManagerInput,
    // Policy-sheet reference values
    expected_productivity: f64,
    expected_rate: f64,
    expected_gross: f64,
    expected_gtn: f64,
    expected_final: f64,
}

fn main() {
    env_logger::init();

    let scenarios = [
        Scenario {
            name: "Scenario 1 (no penalty)",
            input: ManagerInput {
                frozen_team_size: 9,
                cohort_weeks: 4,
                gross_sales: 42,
                net_sales: 37,
                non_discounted_net_sales: 18,
                manager_coupon_net_sales: 12,
                referral_net_sales: 7,
            },
            expected_productivity: 1.02,
            expected_rate: 11_000.0,
            expected_gross: 368_500.0,
            expected_gtn: 88.09,
            expected_final: 368_500.0,
        },
        Scenario {
            name: "Scenario 2 (GTN penalty)",
            input: ManagerInput {
                frozen_team_size: 8,
                cohort_weeks: 4,
                gross_sales: 38,
                net_sales: 30,
                non_discounted_net_sales: 7,
                manager_coupon_net_sales: 20,
                referral_net_sales: 3,
            },
            expected_productivity: 0.93,
            expected_rate: 6_000.0,
            expected_gross: 171_000.0,
            expected_gtn: 78.94,
            expected_final: 136_800.0,
        },
    ];

    println!("Computed vs policy sheet reference");
    println!(
        "{:<24} {:<14} {:>10} {:>10} {:>12} {:>8} {:>12} {:>8}",
        "Scenario", "Slab", "Prod", "Rate", "Gross", "GTN", "Final", "Match"
    );

    for scenario in &scenarios {
        let result = calculate_manager_incentive(&scenario.input);

        let matches = result.net_productivity == scenario.expected_productivity
            && result.incentive_per_sale == scenario.expected_rate
            && result.gross_incentive == scenario.expected_gross
            && result.gtn_percent == scenario.expected_gtn
            && result.final_incentive == scenario.expected_final;

        println!(
            "{:<24} {:<14} {:>10.2} {:>10.0} {:>12.0} {:>8.2} {:>12.0} {:>8}",
            scenario.name,
            result.slab_label,
            result.net_productivity,
            result.incentive_per_sale,
            result.gross_incentive,
            result.gtn_percent,
            result.final_incentive,
            if matches { "OK" } else { "DIFF" }
        );

        if !matches {
            println!(
                "    expected: prod={:.2} rate={:.0} gross={:.0} gtn={:.2} final={:.0}",
                scenario.expected_productivity,
                scenario.expected_rate,
                scenario.expected_gross,
                scenario.expected_gtn,
                scenario.expected_final
            );
        }
    }
}
