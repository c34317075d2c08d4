use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

const HEADER_NAME: &str = "levy.h";

fn main() -> Result<(), Box<dyn Error>> {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let include_dir = crate_dir.join("include");
    fs::create_dir_all(&include_dir)?;

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))?;

    // levy_stdev, levy_stdevf and levy_is_valid land in include/levy.h
    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()?
        .write_to_file(include_dir.join(HEADER_NAME));

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");
    Ok(())
}
