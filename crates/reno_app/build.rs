//! Build script for reno_app.
//!
//! Exposes the asset root configured via the `ASSET_BASE_PATH` environment
//! variable at build time (default `/`), so deployments can move the sample
//! clips without code changes.

fn main() {
    let base = std::env::var("ASSET_BASE_PATH").unwrap_or_else(|_| "/".to_string());
    println!("cargo:rustc-env=ASSET_BASE_PATH={base}");
    println!("cargo:rerun-if-env-changed=ASSET_BASE_PATH");
}
