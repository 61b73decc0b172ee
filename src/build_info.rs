//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Line printed by `--version`, e.g. `funlearn 0.1.0 (2026-10-19 abc1234)`.
pub fn version_line() -> String {
    format!(
        "funlearn {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
