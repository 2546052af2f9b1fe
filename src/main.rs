use themeshop::{app::ShopApp, error::Result};

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = ShopApp::init().await?;
    app.run().await
}
