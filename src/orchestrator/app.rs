//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **加载输入**：读取起始 URL，为空时直接退出（不启动浏览器）
//! 2. **入队**：构建请求队列
//! 3. **资源管理**：唯一持有 `BrowserSession`，循环结束后无论成败都释放
//! 4. **输出**：把所有成功结果作为一条数据推送到数据集
//! 5. **全局统计**：输出成功/失败数量

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::browser::BrowserSession;
use crate::config::Config;
use crate::models::{load_input, ActorInput, DatasetEntry, RequestQueue};
use crate::orchestrator::queue_runner::{QueueRunner, RunReport};
use crate::services::DatasetWriter;
use crate::utils::logging::{log_enqueued, log_startup, print_final_stats};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        log_startup(self.config.headless, &self.config.input_path);

        let input = load_input(Path::new(&self.config.input_path)).await?;

        let Some(mut queue) = build_queue(&input) else {
            info!("未指定起始 URL，程序退出...");
            return Ok(());
        };
        log_enqueued(queue.len());

        let session = BrowserSession::open(&self.config).await?;
        let report = QueueRunner::new(&self.config)
            .run(&mut queue, session.executor())
            .await;

        if let Err(e) = session.close().await {
            warn!("⚠️ 关闭浏览器失败: {:#}", e);
        }

        self.push_results(report).await
    }

    async fn push_results(&self, report: RunReport) -> Result<()> {
        let (succeeded, failed, total) = (report.succeeded, report.failed, report.total());

        let writer = DatasetWriter::new(&self.config.dataset_path);
        writer
            .push(&DatasetEntry {
                urls: report.records,
            })
            .await?;

        print_final_stats(succeeded, failed, total, &self.config.dataset_path);
        Ok(())
    }
}

/// 根据输入构建请求队列
///
/// # 返回
/// 没有有效起始 URL 时返回 `None`
pub fn build_queue(input: &ActorInput) -> Option<RequestQueue> {
    let mut queue = RequestQueue::new();

    for url in input.start_urls() {
        info!("📥 正在入队 {} ...", url);
        if !queue.add_request(url.as_str()) {
            info!("URL 已在队列中，跳过: {}", url);
        }
    }

    if queue.is_empty() {
        None
    } else {
        Some(queue)
    }
}
