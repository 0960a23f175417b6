//! 商品处理上下文
//!
//! 封装"我正在处理第几个商品"这一信息

use std::fmt::Display;

/// 商品处理上下文
#[derive(Debug, Clone)]
pub struct ProductCtx {
    /// 商品页 URL
    pub url: String,

    /// 在队列中的位置（从1开始）
    pub position: usize,

    /// 队列总数（仅用于日志显示）
    pub total: usize,
}

impl ProductCtx {
    pub fn new(url: impl Into<String>, position: usize, total: usize) -> Self {
        Self {
            url: url.into(),
            position,
            total,
        }
    }
}

impl Display for ProductCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[商品 {}/{}]", self.position, self.total)
    }
}
