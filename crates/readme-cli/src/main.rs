use clap::Parser;
use readme_cli::{CliArgs, ReadmeCli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let cli = ReadmeCli::from_args("readme-builder", &args)?;
    cli.run(args).await?;
    Ok(())
}
