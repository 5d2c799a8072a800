use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = renawin::cli::parse();
    app::run(args)
}
