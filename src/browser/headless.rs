use std::path::Path;

use anyhow::Result;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 固定启动参数
pub const LAUNCH_ARGS: [&str; 3] = [
    "--no-sandbox",              // 禁用沙盒，容器内必须
    "--disable-dev-shm-usage",   // 防止共享内存不足
    "--window-size=1920,1080",
];

/// 启动浏览器并创建空白页面
///
/// # 返回
/// (Browser, Page, 事件处理任务)
pub async fn launch_browser(
    headless: bool,
    chrome_executable: Option<&str>,
) -> Result<(Browser, Page, JoinHandle<()>)> {
    info!("🚀 正在启动 Chrome (无头模式: {})...", headless);

    let mut builder = BrowserConfig::builder().args(LAUNCH_ARGS);
    builder = if headless {
        builder.new_headless_mode()
    } else {
        builder.with_head()
    };
    if let Some(executable) = chrome_executable {
        debug!("使用 Chrome 可执行文件: {}", executable);
        builder = builder.chrome_executable(Path::new(executable));
    }

    let config = builder.build().map_err(|e| {
        error!("配置浏览器失败: {}", e);
        anyhow::anyhow!("配置浏览器失败: {}", e)
    })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动浏览器失败: {}", e);
        anyhow::anyhow!("启动浏览器失败: {}. 是否已安装 Chrome/Chromium？", e)
    })?;
    debug!("浏览器启动成功");

    // 在后台处理浏览器事件
    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建页面失败: {}", e);
        anyhow::anyhow!("创建页面失败: {}", e)
    })?;

    info!("✅ 浏览器已就绪");
    Ok((browser, page, handler_task))
}
