use serde::Serialize;

use waymark_core::error::Result;

/// Output any report as pretty-printed JSON on stdout
pub fn print<T: Serialize + ?Sized>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
