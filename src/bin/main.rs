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

use clap::Parser;
use priority_checkout::{Checkout, CheckoutConfig, PriceRange, report, source};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// Priority Checkout - Simulate a supermarket line served by priority
///
/// Serves customers by tier (special needs, express, general) and prints
/// one invoice per served customer as CSV on stdout. Progress is logged to
/// stderr; set RUST_LOG to change verbosity.
#[derive(Parser, Debug)]
#[command(name = "checkout")]
#[command(about = "Serve a checkout line by priority and print the invoices", long_about = None)]
struct Args {
    /// Path to a customer CSV file; the demo line is used when omitted
    ///
    /// Expected format: name,disability,senior,pregnant,items
    /// Example: checkout customers.csv > invoices.csv
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Lowest price assigned to an item
    #[arg(long, default_value_t = PriceRange::DEFAULT_MIN)]
    min_price: u32,

    /// Highest price assigned to an item
    #[arg(long, default_value_t = PriceRange::DEFAULT_MAX)]
    max_price: u32,

    /// Seed for reproducible prices
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> Result<CheckoutConfig, priority_checkout::CheckoutError> {
        Ok(CheckoutConfig {
            prices: PriceRange::new(self.min_price, self.max_price)?,
            seed: self.seed,
        })
    }
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

fn main() {
    let args = Args::parse();
    setup_tracing();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            process::exit(1);
        }
    };

    let customers = match &args.input {
        Some(path) => {
            let file = match File::open(path) {
                Ok(f) => f,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Error opening file");
                    process::exit(1);
                }
            };
            match source::read_customers(BufReader::new(file)) {
                Ok(customers) => customers,
                Err(e) => {
                    error!(error = %e, "Error reading customers");
                    process::exit(1);
                }
            }
        }
        None => match source::demo_customers() {
            Ok(customers) => customers,
            Err(e) => {
                error!(error = %e, "Error building demo customers");
                process::exit(1);
            }
        },
    };

    let mut checkout = Checkout::new(&config);
    if checkout.admit_all(customers) == 0 {
        info!("No customers to serve");
        return;
    }

    let summary = match checkout.serve_all() {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Service aborted");
            process::exit(1);
        }
    };
    info!(
        customers = summary.customers,
        grand_total = %summary.grand_total,
        "Service complete"
    );

    let invoices = checkout.report_invoices();
    if let Err(e) = report::write_invoices(&invoices, std::io::stdout()) {
        error!(error = %e, "Error writing output");
        process::exit(1);
    }
}
