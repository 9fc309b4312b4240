#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shoplist::run().await
}
