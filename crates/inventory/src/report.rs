//! Human-readable stock report.

use std::io::{self, Write};

use crate::store::InventoryStore;

const REPORT_HEADER: &str = "Items Report";

impl InventoryStore {
    /// Write the stock report: a header, then `<name> -> <qty>` per item in
    /// name order.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{REPORT_HEADER}")?;
        for (name, qty) in self.iter() {
            writeln!(out, "{name} -> {qty}")?;
        }
        Ok(())
    }

    /// Print the stock report to stdout.
    pub fn print_data(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out)?;
        out.flush()
    }
}
