mod emit;
mod error;
mod grammar;
mod parser;
mod rule;
mod run;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<_> = std::env::args().collect();
    match &args[..] {
        [_, out_dir] => run::generate(out_dir)?,
        _ => {
            eprintln!("USAGE: astgen <output directory>");
            std::process::exit(1)
        }
    }
    Ok(())
}
