use crate::models::Customer;
use std::io::{self, Write};

/// Write one `ID:<user_id> Name:<name>` line per customer, in sequence order
pub fn emit<W: Write>(out: &mut W, customers: &[Customer]) -> io::Result<()> {
    for customer in customers {
        writeln!(out, "ID:{} Name:{}", customer.user_id, customer.name)?;
    }
    Ok(())
}

/// Emit the invited list to standard output
pub fn print_invited(customers: &[Customer]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    emit(&mut handle, customers)
}
