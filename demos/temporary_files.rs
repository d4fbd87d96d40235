//! Temporary files that clean up after themselves, and ones that don't.
//!
//! Run with: RUST_LOG=trace cargo run --example temporary_files

use contentdump::{ContentDumper, Dump, DumpOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dumper = ContentDumper::new(|w| {
        writeln!(w, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>")?;
        Ok(())
    })
    .with_options(DumpOptions::new().with_temp_prefix("drawing-").with_temp_suffix(".svg"));

    let mut tmp = dumper.temporary_file(true)?;
    let path = tmp.path().to_path_buf();
    println!("{} holds {:?}", path.display(), tmp.contents_string()?);
    tmp.close()?;
    println!("after close, exists: {}", path.exists());

    let kept = dumper.temporary_file(false)?;
    let path = kept.path().to_path_buf();
    kept.close()?;
    println!("kept {}, exists: {}", path.display(), path.exists());
    std::fs::remove_file(&path)?;

    Ok(())
}
