//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 加载输入、构建队列
//! - 管理浏览器资源（BrowserSession）
//! - 推送数据集、输出全局统计
//!
//! ### `queue_runner` - 队列运行器
//! - 逐个处理队列中的 URL
//! - 捕获单个商品的错误并跳过
//!
//! ## 层次关系
//!
//! ```text
//! app (处理 ActorInput)
//!     ↓
//! queue_runner (处理 RequestQueue)
//!     ↓
//! workflow::ProductFlow (处理单个商品)
//!     ↓
//! services (能力层：字段提取 / 变体展开)
//!     ↓
//! infrastructure (基础设施：JsExecutor)
//! ```

pub mod app;
pub mod queue_runner;

pub use app::{build_queue, App};
pub use queue_runner::{QueueRunner, RunReport};
