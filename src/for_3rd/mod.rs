//! Support of third-party crates.

mod de;
mod ser;
