//! FinanceForward CLI
//!
//! Runs the reference loan calculation and writes the amortization schedule

use finance_forward::input::{
    self, store::LOAN_FORM_KEY, Currency, FormStoreExt, JsonFileStore, RepaymentFrequency,
};
use finance_forward::loan::compute_loan;
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    println!("FinanceForward v0.1.0");
    println!("=====================\n");

    // Reference loan - 10,000 at 5% over 5 years, monthly repayments
    let loan = input::validate_loan(
        10_000.0,
        5.0,
        5,
        RepaymentFrequency::Monthly,
        Currency::Usd,
    )
    .expect("reference loan input is valid");

    println!("Loan: {} {:.2}", loan.currency.code(), loan.principal);
    println!("  Rate: {:.2}% annual", loan.annual_rate_pct);
    println!("  Tenure: {} years, {} repayments", loan.tenure_years, loan.frequency.label());
    println!("  Payments: {}", loan.number_of_payments());
    println!();

    let result = compute_loan(&loan);

    // Print header
    println!("Amortization Schedule ({} periods):", result.payment_count());
    println!(
        "{:>6} {:>12} {:>12} {:>14}",
        "Period", "Principal", "Interest", "Balance"
    );
    println!("{}", "-".repeat(48));

    // Print first 12 periods to console
    for record in result.schedule.iter().take(12) {
        println!(
            "{:>6} {:>12.2} {:>12.2} {:>14.2}",
            record.period, record.principal, record.interest, record.ending_balance
        );
    }

    if result.payment_count() > 12 {
        println!("... ({} more periods)", result.payment_count() - 12);
    }

    // Write full schedule to CSV
    let csv_path = "amortization_schedule.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");

    writeln!(file, "Period,Principal,Interest,EndingBalance").unwrap();
    for record in &result.schedule {
        writeln!(
            file,
            "{},{:.8},{:.8},{:.8}",
            record.period, record.principal, record.interest, record.ending_balance
        )
        .unwrap();
    }

    println!("\nFull schedule written to: {}", csv_path);

    // Print summary
    println!("\nSummary:");
    println!("  {} Installment: {:.2}", loan.frequency.label(), result.installment);
    println!("  Total Repayment: {:.2}", result.total_repayment);
    println!("  Total Interest: {:.2}", result.total_interest);
    println!("  Final Balance: {:.2}", result.final_balance());

    // Echo the inputs back on the next run
    let store = JsonFileStore::new(".finance_forward");
    if let Err(err) = store.save(LOAN_FORM_KEY, &loan) {
        log::warn!("could not persist form values: {}", err);
    }
}
