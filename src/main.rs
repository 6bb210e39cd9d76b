mod cli;
mod tracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    // Populate the environment from a local .env file when present
    dotenvy::dotenv().ok();

    cli::run().await?;

    Ok(())
}
