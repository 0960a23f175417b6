//! # Product Scraper
//!
//! 一个用于抓取单站点商品页的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `browser/` - 启动或连接 Chrome，持有 Browser
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `JsExecutor` - 唯一的 page owner，实现 `PageDom`
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理当前页面
//! - `FieldExtractor` - 按候选链提取字段
//! - `VariantExpander` - 逐个点击变体并记录价格与主图
//! - `DatasetWriter` - 追加写入数据集
//!
//! ### ③ 流程层（Workflow）
//! - `ProductFlow` - 一个商品的完整流程（导航 → 提取 → 变体）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/queue_runner` - 队列循环，单个商品失败只记录并跳过
//! - `orchestrator/app` - 输入、浏览器生命周期、输出
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::BrowserSession;
pub use config::Config;
pub use error::{ScrapeError, ScrapeResult};
pub use infrastructure::{JsExecutor, PageDom};
pub use models::{ProductRecord, RequestQueue, VariantRecord};
pub use orchestrator::{App, QueueRunner, RunReport};
pub use workflow::{ProductCtx, ProductFlow};
