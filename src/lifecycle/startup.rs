//! Startup announcement.
//!
//! Operators identify which build tried to start from this single line,
//! so it is written before the contract is touched.

/// Product name shown in the startup line.
pub const PRODUCT_NAME: &str = "Canopy Plugin Playground";

/// Release tag shown in the startup line.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Implementation runtime shown in the startup line.
pub const RUNTIME: &str = "Rust";

/// `"<ProductName> <Version> (<Runtime>)"`.
pub fn banner() -> String {
    format!("{} {} ({})", PRODUCT_NAME, VERSION, RUNTIME)
}

/// Emit the startup line.
pub fn announce() {
    tracing::info!("{}", banner());
}
