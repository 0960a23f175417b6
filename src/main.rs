use anyhow::Result;
use product_scraper::utils::logging;
use product_scraper::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::new(config).run().await?;

    Ok(())
}
