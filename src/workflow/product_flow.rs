//! 商品处理流程 - 流程层
//!
//! 核心职责：定义"一个商品"的完整处理流程
//!
//! 流程顺序：
//! 1. 导航到商品页
//! 2. 提取基础字段
//! 3. 展开变体

use tracing::{debug, info};

use crate::config::Config;
use crate::error::ScrapeResult;
use crate::infrastructure::PageDom;
use crate::models::ProductRecord;
use crate::services::{FieldExtractor, SettlePolicy, VariantExpander};
use crate::utils::logging::truncate_text;
use crate::workflow::product_ctx::ProductCtx;

/// 商品处理流程
///
/// - 编排导航、提取、变体展开
/// - 不持有页面资源
/// - 任一步失败都返回错误，由调用方决定如何处理
#[derive(Debug, Clone)]
pub struct ProductFlow {
    extractor: FieldExtractor,
    expander: VariantExpander,
}

impl ProductFlow {
    pub fn new(config: &Config) -> Self {
        Self::with_settle(SettlePolicy::from_config(config))
    }

    pub fn with_settle(settle: SettlePolicy) -> Self {
        let extractor = FieldExtractor::new();
        Self {
            extractor,
            expander: VariantExpander::new(extractor, settle),
        }
    }

    pub async fn run<D: PageDom>(&self, dom: &D, ctx: &ProductCtx) -> ScrapeResult<ProductRecord> {
        dom.navigate(&ctx.url).await?;
        debug!("{} 页面已加载", ctx);

        let record = self.extractor.extract(dom, &ctx.url).await?;
        info!(
            "{} ✓ {} | 价格 {} | 图片 {} 张",
            ctx,
            truncate_text(&record.title, 40),
            record.price,
            record.images.len()
        );

        let variants = self.expander.expand(dom).await?;
        if !variants.is_empty() {
            info!("{} ✓ 变体 {} 个", ctx, variants.len());
        }

        Ok(record.with_variants(variants))
    }
}
