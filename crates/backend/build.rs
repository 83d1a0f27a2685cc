//! Places the workspace config.toml next to the backend binary, where
//! `shared::config::load_config` looks for it.

use std::path::{Path, PathBuf};

/// target/<profile>, three levels above target/<profile>/build/<pkg>-<hash>/out
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR")?);
    out_dir.ancestors().nth(3).map(Path::to_path_buf)
}

fn main() {
    let config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    println!("cargo:rerun-if-changed={}", config.display());

    let Some(dest) = profile_dir() else {
        println!("cargo:warning=OUT_DIR not set, config.toml not copied");
        return;
    };

    if let Err(e) = std::fs::copy(&config, dest.join("config.toml")) {
        println!(
            "cargo:warning=config.toml not copied ({}), the embedded default will be used",
            e
        );
    }
}
