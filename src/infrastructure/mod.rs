//! 基础设施层
//!
//! 持有稀缺资源（Page），只暴露能力

pub mod dom;
#[cfg(test)]
pub(crate) mod fake_page;
pub mod js_executor;

pub use dom::PageDom;
pub use js_executor::JsExecutor;
