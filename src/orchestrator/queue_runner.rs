//! 队列运行器 - 编排层
//!
//! ## 职责
//!
//! 逐个取出待处理 URL，交给 `ProductFlow`，收集成功结果。
//!
//! ## 设计特点
//!
//! - **单条边界**：单个商品的任何错误都在这里捕获、记录并跳过
//! - **只处理一次**：出队的条目在本轮循环结束时被标记为已处理，不重试、不重新入队
//! - **串行**：同一时间只处理一个商品

use tracing::{error, info};

use crate::config::Config;
use crate::infrastructure::PageDom;
use crate::models::{ProductRecord, RequestQueue};
use crate::workflow::{ProductCtx, ProductFlow};

/// 运行结果
#[derive(Debug, Default)]
pub struct RunReport {
    pub records: Vec<ProductRecord>,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// 队列运行器
pub struct QueueRunner {
    flow: ProductFlow,
}

impl QueueRunner {
    pub fn new(config: &Config) -> Self {
        Self {
            flow: ProductFlow::new(config),
        }
    }

    pub fn with_flow(flow: ProductFlow) -> Self {
        Self { flow }
    }

    /// 处理队列直到没有待处理条目
    pub async fn run<D: PageDom>(&self, queue: &mut RequestQueue, dom: &D) -> RunReport {
        let total = queue.len();
        let mut report = RunReport::default();

        while let Some(request) = queue.fetch_next() {
            let ctx = ProductCtx::new(request.url(), request.position(), total);
            info!("{} 🔍 正在抓取 {} ...", ctx, ctx.url);

            match self.flow.run(dom, &ctx).await {
                Ok(record) => {
                    report.records.push(record);
                    report.succeeded += 1;
                }
                Err(e) => {
                    let report_chain = anyhow::Error::new(e);
                    error!("{} ❌ 无法从 {} 提取数据: {:?}", ctx, ctx.url, report_chain);
                    report.failed += 1;
                }
            }
            // request 在此离开作用域，条目被标记为已处理
        }

        report
    }
}
