#[tokio::main]
async fn main() -> std::io::Result<()> {
    platform_server::run_with_config().await
}
