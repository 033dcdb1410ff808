//! Address detection command.

use anyhow::Result;

use crate::exec::SystemRunner;
use crate::resolver;

/// Run the ip command: detect and print the LAN address.
pub async fn run() -> Result<()> {
    println!("{}", resolver::resolve(&SystemRunner::new()));
    Ok(())
}
