use eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    core_config::tracing::install_color_eyre();
    academy::run().await
}
