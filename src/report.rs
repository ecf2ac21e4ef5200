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

//! Invoice report output.

use crate::billing::Invoice;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// Marker written in the `line` column of an invoice's closing row.
pub const TOTAL_LINE: &str = "total";

/// One CSV row of the invoice report.
#[derive(Debug, Serialize)]
struct InvoiceRow<'a> {
    invoice: usize,
    customer: &'a str,
    completed_at: String,
    line: String,
    item: &'a str,
    price: Decimal,
}

/// Writes invoices as CSV, numbered from 1 in the order given.
///
/// # CSV Format
///
/// Columns: `invoice, customer, completed_at, line, item, price`
///
/// ```csv
/// invoice,customer,completed_at,line,item,price
/// 1,Sofía,2025-10-20T14:03:11.402+00:00,1,Eggs,4210
/// 1,Sofía,2025-10-20T14:03:11.402+00:00,2,Milk,1999
/// 1,Sofía,2025-10-20T14:03:11.402+00:00,total,,6209
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_invoices<W: Write>(invoices: &[Invoice], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    for (index, invoice) in invoices.iter().enumerate() {
        let completed_at = invoice.completed_at().to_rfc3339();
        for (n, line) in invoice.lines().iter().enumerate() {
            wtr.serialize(InvoiceRow {
                invoice: index + 1,
                customer: invoice.customer(),
                completed_at: completed_at.clone(),
                line: (n + 1).to_string(),
                item: &line.item,
                price: line.price,
            })?;
        }
        wtr.serialize(InvoiceRow {
            invoice: index + 1,
            customer: invoice.customer(),
            completed_at,
            line: TOTAL_LINE.to_string(),
            item: "",
            price: invoice.total(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
