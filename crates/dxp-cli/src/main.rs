//! dxp - Document Export Page CLI
//!
//! Builds the export view of collected inputs and goal answers outside the
//! host runtime.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default configuration
//! dxp config init
//!
//! # Render a content snapshot as an HTML fragment
//! dxp export --input snapshot.json
//!
//! # Produce the template object for document generation
//! dxp export --input snapshot.json --format json --output export.json
//!
//! # Upgrade parameters stored by an older release
//! dxp upgrade --input content.json --from 1.3
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
