use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = unbackslash::cli::parse();
    app::run(args)
}
