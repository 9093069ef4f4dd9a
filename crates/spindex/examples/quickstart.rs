//! Walk every domain at its default size and print a summary line.
//!
//! Pass a TOML file to sweep a single configured domain instead:
//!
//! ```text
//! cargo run -p spindex --example quickstart -- sweep.toml
//! ```

use spindex::prelude::*;
use std::path::Path;

fn summarize(index: &DomainIndex) -> Result<(), SweepError> {
    let extremes = cross_check(index)?;
    println!(
        "{:<9} total={:<6} min={:?} max={:?} center={:?}",
        index.domain(),
        extremes.total,
        extremes.min_node,
        extremes.max_node,
        extremes.center(),
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = std::env::args().nth(1) {
        let config = SweepConfig::load(Path::new(&path))?;
        let index = config.validate()?;
        summarize(&index)?;
        let nodes = par_nodes(&index, config.radius)?;
        for (i, node) in nodes.iter().enumerate().take(8) {
            println!("  {i:>3} -> {node:?}");
        }
        return Ok(());
    }

    for domain in Domain::ALL {
        let config = SweepConfig {
            domain,
            ..SweepConfig::default()
        };
        summarize(&config.validate()?)?;
    }
    Ok(())
}
