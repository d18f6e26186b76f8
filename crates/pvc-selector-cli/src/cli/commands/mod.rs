//! CLI command handlers.

mod applies_to;
mod execute;
mod list;

pub use applies_to::run_applies_to;
pub use execute::run_execute;
pub use list::run_list;

use anyhow::Result;
use serde_json::Value;

fn print_json(value: &Value, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
