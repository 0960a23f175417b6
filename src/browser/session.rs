//! 浏览器会话
//!
//! 整个运行期间唯一的浏览器资源：循环开始前打开一次，结束后关闭一次。

use anyhow::Result;
use chromiumoxide::Browser;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::browser::{connect_to_browser, launch_browser};
use crate::config::Config;
use crate::infrastructure::JsExecutor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionMode {
    /// 本程序启动的浏览器，关闭时退出进程
    Launched,
    /// 连接到外部浏览器，关闭时只关闭自己的页面
    Connected,
}

/// 浏览器会话
///
/// drop 时停止事件处理任务；未手动关闭的浏览器进程由 chromiumoxide 在 drop 时结束。
pub struct BrowserSession {
    browser: Browser,
    executor: JsExecutor,
    handler_task: JoinHandle<()>,
    mode: SessionMode,
}

impl BrowserSession {
    /// 根据配置启动或连接浏览器
    pub async fn open(config: &Config) -> Result<Self> {
        let (browser, page, handler_task, mode) = match config.browser_debug_port {
            Some(port) => {
                let (browser, page, task) = connect_to_browser(port).await?;
                (browser, page, task, SessionMode::Connected)
            }
            None => {
                let (browser, page, task) =
                    launch_browser(config.headless, config.chrome_executable.as_deref()).await?;
                (browser, page, task, SessionMode::Launched)
            }
        };

        Ok(Self {
            browser,
            executor: JsExecutor::new(page),
            handler_task,
            mode,
        })
    }

    pub fn executor(&self) -> &JsExecutor {
        &self.executor
    }

    /// 释放浏览器资源
    pub async fn close(mut self) -> Result<()> {
        match self.mode {
            SessionMode::Launched => {
                info!("🔒 正在关闭浏览器...");
                self.browser.close().await?;
                if let Err(e) = self.browser.wait().await {
                    warn!("等待浏览器进程退出失败: {}", e);
                }
            }
            SessionMode::Connected => {
                info!("🔒 正在关闭页面...");
                self.executor.page().clone().close().await?;
            }
        }
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}
