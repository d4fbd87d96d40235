//! Dump one object to every kind of destination.
//!
//! Run with: cargo run --example json_dump

use contentdump::{Dump, JsonDumper};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Pattern {
    name: &'static str,
    rows: Vec<&'static str>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dumper = JsonDumper::new(|| {
        Ok(Pattern {
            name: "garter scarf",
            rows: vec!["k20", "k20", "p20"],
        })
    });

    println!("object: {:?}", dumper.object()?);
    println!("string: {}", dumper.string()?);

    print!("stdout: ");
    dumper.clone().pretty().print()?;
    println!();

    let path = dumper.temporary_path()?;
    println!("kept temporary file: {}", path.display());
    std::fs::remove_file(path)?;

    Ok(())
}
