use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

include!("src/bin/astv/cli.rs");

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/bin/astv/cli.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    generate_to(Bash, &mut cmd, "astv", &outdir)?;
    generate_to(Zsh, &mut cmd, "astv", &outdir)?;
    generate_to(Fish, &mut cmd, "astv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
