//! Build script for hangeul-morph
//!
//! Re-runs the build when the embedded seed dictionary changes.

fn main() {
    println!("cargo:rerun-if-changed=dictionaries/seed.json");
}
