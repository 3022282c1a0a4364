//! One-off incentive calculation from the command line
//!
//! Runs the frozen cohort numbers through validation and the matching
//! calculator, then prints a payout report (or JSON with `--json`).

use clap::{Args, Parser, Subcommand};
use incentive_system::format::{format_decimal, format_inr};
use incentive_system::{
    calculate_ic_incentive, calculate_manager_incentive, validate_ic_input,
    validate_manager_input, EmploymentStatus, IcInput, ManagerInput, ValidationError,
};

#[derive(Parser)]
#[command(name = "calc", about = "Sales incentive calculator")]
struct Cli {
    /// Print the raw result record as JSON instead of a report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    role: Role,
}

#[derive(Subcommand)]
enum Role {
    /// Individual contributor incentive
    Ic(IcArgs),
    /// Manager incentive
    Manager(ManagerArgs),
}

#[derive(Args)]
struct IcArgs {
    /// Treat the IC as on probation
    #[arg(long)]
    probation: bool,

    #[arg(long, default_value_t = 4)]
    cohort_weeks: u32,

    #[arg(long)]
    net_sales: u32,

    #[arg(long)]
    non_discounted: u32,

    #[arg(long, default_value_t = 0)]
    referral: u32,

    #[arg(long, default_value_t = 0)]
    coupon: u32,
}

#[derive(Args)]
struct ManagerArgs {
    #[arg(long)]
    team_size: u32,

    #[arg(long, default_value_t = 4)]
    cohort_weeks: u32,

    #[arg(long)]
    gross_sales: u32,

    #[arg(long)]
    net_sales: u32,

    #[arg(long)]
    non_discounted: u32,

    #[arg(long, default_value_t = 0)]
    coupon: u32,

    #[arg(long, default_value_t = 0)]
    referral: u32,
}

fn report_errors(errors: Vec<ValidationError>) -> anyhow::Error {
    for error in &errors {
        eprintln!("invalid input - {error}");
    }
    anyhow::anyhow!("input failed validation ({} error(s))", errors.len())
}

fn run_ic(args: IcArgs, json: bool) -> anyhow::Result<()> {
    let input = IcInput {
        employment_status: if args.probation {
            EmploymentStatus::Probation
        } else {
            EmploymentStatus::NonProbation
        },
        cohort_weeks: args.cohort_weeks,
        net_sales: args.net_sales,
        non_discounted_net_sales: args.non_discounted,
        referral_sales_count: args.referral,
        manager_coupon_sales_count: args.coupon,
    };

    if let Err(errors) = validate_ic_input(&input) {
        return Err(report_errors(errors));
    }

    let result = calculate_ic_incentive(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("IC Incentive");
    println!("  Eligible:        {}", if result.eligible { "Yes" } else { "No" });
    if !result.slab_label.is_empty() {
        println!("  Slab:            {}", result.slab_label);
    }
    println!(
        "  Rate/sale:       {}",
        format_inr(result.incentive_per_non_discounted_sale)
    );
    println!("  Non-discounted:  {}", format_inr(result.non_discounted_incentive));
    println!("  Referral:        {}", format_inr(result.referral_incentive));
    println!("  Manager coupon:  {}", format_inr(result.manager_coupon_incentive));
    println!("  Total:           {}", format_inr(result.total_incentive));
    if let Some(message) = &result.message {
        println!("  Note:            {message}");
    }

    Ok(())
}

fn run_manager(args: ManagerArgs, json: bool) -> anyhow::Result<()> {
    let input = ManagerInput {
        frozen_team_size: args.team_size,
        cohort_weeks: args.cohort_weeks,
        gross_sales: args.gross_sales,
        net_sales: args.net_sales,
        non_discounted_net_sales: args.non_discounted,
        manager_coupon_net_sales: args.coupon,
        referral_net_sales: args.referral,
    };

    if let Err(errors) = validate_manager_input(&input) {
        return Err(report_errors(errors));
    }

    let result = calculate_manager_incentive(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Manager Incentive");
    println!("  Eligible:        {}", if result.eligible { "Yes" } else { "No" });
    println!("  Productivity:    {}", format_decimal(result.net_productivity));
    println!("  Team category:   {}", result.team_category);
    if !result.slab_label.is_empty() {
        println!("  Slab:            {}", result.slab_label);
    }
    println!("  Rate/sale:       {}", format_inr(result.incentive_per_sale));
    println!("  Non-discounted:  {}", format_inr(result.breakdown_a));
    println!("  Manager coupon:  {}", format_inr(result.breakdown_b));
    println!("  Referral (50%):  {}", format_inr(result.breakdown_c));
    println!("  Gross:           {}", format_inr(result.gross_incentive));
    println!("  GTN:             {}%", format_decimal(result.gtn_percent));
    if result.penalty_applied {
        println!("  Penalty (20%):   {}", format_inr(result.penalty_amount));
    }
    println!("  Final:           {}", format_inr(result.final_incentive));
    if let Some(message) = &result.message {
        println!("  Note:            {message}");
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.role {
        Role::Ic(args) => run_ic(args, cli.json),
        Role::Manager(args) => run_manager(args, cli.json),
    }
}
