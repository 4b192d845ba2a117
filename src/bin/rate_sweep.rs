//! Sweep a loan across an interest-rate range
//!
//! Computes installment and total interest for each rate step in parallel
//! and writes the results to CSV for comparison.

use clap::Parser;
use finance_forward::input::{validate_loan, Currency, RepaymentFrequency};
use finance_forward::loan::compute_loan;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Sweep loan installments across an interest-rate range")]
struct Args {
    /// Amount borrowed
    #[arg(long, default_value_t = 10_000.0)]
    principal: f64,

    /// Loan tenure in years
    #[arg(long, default_value_t = 5)]
    tenure_years: u32,

    /// Repayment frequency: monthly, bi-weekly, or weekly
    #[arg(long, default_value = "monthly")]
    frequency: String,

    /// First annual rate in the sweep (percent)
    #[arg(long, default_value_t = 0.0)]
    rate_from: f64,

    /// Last annual rate in the sweep (percent)
    #[arg(long, default_value_t = 15.0)]
    rate_to: f64,

    /// Rate increment between sweep points (percent)
    #[arg(long, default_value_t = 0.25)]
    rate_step: f64,

    /// Output CSV path
    #[arg(long, default_value = "rate_sweep.csv")]
    output: String,
}

fn parse_frequency(value: &str) -> Option<RepaymentFrequency> {
    match value {
        "monthly" => Some(RepaymentFrequency::Monthly),
        "bi-weekly" => Some(RepaymentFrequency::BiWeekly),
        "weekly" => Some(RepaymentFrequency::Weekly),
        _ => None,
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let frequency = parse_frequency(&args.frequency).unwrap_or_else(|| {
        eprintln!("Unknown frequency: {} (expected monthly, bi-weekly, or weekly)", args.frequency);
        std::process::exit(2);
    });

    if args.rate_step <= 0.0
        || args.rate_to < args.rate_from
        || args.rate_from < 0.0
        || args.rate_to > 100.0
    {
        eprintln!("Invalid rate range (expected 0 <= from <= to <= 100 with a positive step)");
        std::process::exit(2);
    }

    // Build the rate grid up front so results keep sweep order
    let mut rates = Vec::new();
    let mut rate = args.rate_from;
    while rate <= args.rate_to + 1e-9 {
        rates.push(rate);
        rate += args.rate_step;
    }

    println!(
        "Sweeping {} rates for {:.2} over {} years ({})...",
        rates.len(),
        args.principal,
        args.tenure_years,
        frequency.label()
    );
    let start = Instant::now();

    // Run the sweep in parallel
    let results: Vec<_> = rates
        .par_iter()
        .map(|&rate_pct| {
            let input = validate_loan(
                args.principal,
                rate_pct,
                args.tenure_years,
                frequency,
                Currency::Usd,
            )
            .expect("sweep rate within validated bounds");
            (rate_pct, compute_loan(&input))
        })
        .collect();

    println!("Sweep complete in {:?}", start.elapsed());

    // Write output
    let mut file = File::create(&args.output).expect("Failed to create output file");
    writeln!(file, "RatePct,Installment,TotalRepayment,TotalInterest,Payments").unwrap();
    for (rate_pct, result) in &results {
        writeln!(
            file,
            "{:.4},{:.2},{:.2},{:.2},{}",
            rate_pct,
            result.installment,
            result.total_repayment,
            result.total_interest,
            result.payment_count()
        )
        .unwrap();
    }

    println!("Results written to: {}", args.output);

    // Print endpoints for a quick sanity check
    if let (Some((lo, first)), Some((hi, last))) = (results.first(), results.last()) {
        println!(
            "  {:.2}%: installment {:.2}, total interest {:.2}",
            lo, first.installment, first.total_interest
        );
        println!(
            "  {:.2}%: installment {:.2}, total interest {:.2}",
            hi, last.installment, last.total_interest
        );
    }
}
