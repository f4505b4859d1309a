use eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    focuskit_cli::cli::run()
}
