use anyhow::Result;
use chatgate::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
