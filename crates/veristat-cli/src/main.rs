//! veristat: interactive inferential statistics calculator
//!
//! Menu-driven shell around veristat-core: prompts for comma-separated
//! samples, runs the independent two-sample t-test or Pearson correlation,
//! and prints a formatted report. Calculation errors are reported and the
//! menu continues; only the exit option (or end of input) leaves the loop.

mod input;

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};
use veristat_core::tests::correlation::pearson;
use veristat_core::tests::parametric::{t_test, TTestOptions, SIZE_IMBALANCE_THRESHOLD};

use input::read_sample;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    println!("Welcome to the statistics calculator");
    loop {
        println!();
        println!("Options");
        println!("1: Independent two-sample t-test");
        println!("2: Pearson's correlation coefficient");
        println!("3: Exit");

        let Some(choice) = prompt_line("Enter your choice (1, 2, or 3): ")? else {
            break;
        };
        match choice.trim() {
            "1" => run_t_test()?,
            "2" => run_correlation()?,
            "3" => {
                println!("Thank you for using the statistics calculator. Goodbye!");
                break;
            }
            other => println!("Invalid choice {other:?}. Please enter 1, 2, or 3."),
        }
    }
    Ok(())
}

fn run_t_test() -> io::Result<()> {
    println!();
    println!("Independent two-sample t-test");

    let Some(sample1) = read_sample("sample 1")? else {
        return Ok(());
    };
    let Some(sample2) = read_sample("sample 2")? else {
        return Ok(());
    };

    match t_test(&sample1, &sample2, &TTestOptions::default()) {
        Ok(result) => {
            debug!(
                t = result.t_statistic,
                df = result.df,
                method = %result.method,
                "t-test computed"
            );
            if result.size_imbalance {
                warn!(n1 = result.n1, n2 = result.n2, "sample sizes are imbalanced");
                println!(
                    "Warning: difference in sample size exceeds {:.0}%, adjust your data for more reliable results",
                    SIZE_IMBALANCE_THRESHOLD * 100.0
                );
            }
            println!();
            println!("Results ({})", result.method);
            println!("T statistic:          {:.4}", result.t_statistic);
            println!("Degrees of freedom:   {:.2}", result.df);
            println!("Variance of sample 1: {:.4}", result.variance1);
            println!("Variance of sample 2: {:.4}", result.variance2);
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn run_correlation() -> io::Result<()> {
    println!();
    println!("Pearson's correlation coefficient");

    let Some(x) = read_sample("X (first variable)")? else {
        return Ok(());
    };
    let Some(y) = read_sample("Y (second variable)")? else {
        return Ok(());
    };

    match pearson(&x, &y) {
        Ok(r) => {
            debug!(r, n = x.len(), "correlation computed");
            println!();
            println!("The correlation coefficient (r) is: {r:.4}");
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

/// Print a prompt and read one line. Returns `None` when the input stream
/// ends.
fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
