//! 变体展开服务 - 业务能力层
//!
//! 逐个点击变体控件，记录每个变体点击后的价格和主图

use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::config::Config;
use crate::error::{ScrapeError, ScrapeResult};
use crate::infrastructure::PageDom;
use crate::models::VariantRecord;
use crate::services::field_extractor::FieldExtractor;
use crate::services::selectors;

/// 点击后等待页面稳定的策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlePolicy {
    /// 最长等待时间
    pub timeout: Duration,
    /// 轮询间隔
    pub poll_interval: Duration,
}

impl Default for SettlePolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(1000),
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// 等待时间上限，超出的配置值会被截断
pub const MAX_SETTLE_TIMEOUT: Duration = Duration::from_secs(60);

impl SettlePolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: config.settle_timeout().min(MAX_SETTLE_TIMEOUT),
            poll_interval: config.settle_poll_interval().max(Duration::from_millis(1)),
        }
    }
}

/// 价格与主图的原始读数，用于判断页面是否已重新渲染
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    sale_price: Option<String>,
    regular_price: Option<String>,
    active_image: Option<String>,
}

impl Snapshot {
    /// 读取失败视为空值
    async fn take<D: PageDom>(dom: &D) -> Self {
        Self {
            sale_price: dom.text_of(selectors::SALE_PRICE).await.ok().flatten(),
            regular_price: dom.text_of(selectors::REGULAR_PRICE).await.ok().flatten(),
            active_image: dom
                .attr_of(selectors::ACTIVE_SLIDE_IMAGE, selectors::IMAGE_SOURCE_ATTR)
                .await
                .ok()
                .flatten(),
        }
    }
}

/// 变体展开服务
///
/// 同一页面上的变体必须串行点击，并发点击会互相覆盖 DOM 状态。
#[derive(Debug, Clone)]
pub struct VariantExpander {
    extractor: FieldExtractor,
    settle: SettlePolicy,
}

impl VariantExpander {
    pub fn new(extractor: FieldExtractor, settle: SettlePolicy) -> Self {
        Self { extractor, settle }
    }

    /// 展开页面上的所有变体，按 DOM 顺序
    ///
    /// 任一变体失败都会使整个商品失败。
    pub async fn expand<D: PageDom>(&self, dom: &D) -> ScrapeResult<Vec<VariantRecord>> {
        let count = dom.count(selectors::VARIANT_INPUT).await?;
        debug!("找到 {} 个变体控件", count);

        let mut variants = Vec::with_capacity(count);
        for index in 0..count {
            variants.push(self.expand_one(dom, index).await?);
        }

        Ok(variants)
    }

    async fn expand_one<D: PageDom>(&self, dom: &D, index: usize) -> ScrapeResult<VariantRecord> {
        let before = Snapshot::take(dom).await;

        dom.click_nth(selectors::VARIANT_INPUT, index).await?;
        self.wait_for_settle(dom, &before).await;

        let price = self.extractor.extract_price(dom).await?;
        let image = self.extractor.extract_main_image(dom).await?;
        let name = dom
            .nested_attr_of_nth(
                selectors::VARIANT_INPUT,
                index,
                selectors::VARIANT_VALUE_INPUT,
                "value",
            )
            .await?
            .ok_or_else(|| {
                ScrapeError::missing_attribute(
                    format!("{}[{}] {}", selectors::VARIANT_INPUT, index, selectors::VARIANT_VALUE_INPUT),
                    "value",
                )
            })?;

        debug!("变体 {}: {} | {} | {}", index + 1, name, price, image);

        Ok(VariantRecord { name, price, image })
    }

    /// 轮询直到主图切换且读数保持一轮不变，超时后照常继续
    ///
    /// 价格往往先于轮播图更新，只看到价格变化时继续等待。
    /// 选中的变体与当前主图相同时不会有变化，此时等待满超时时间。
    async fn wait_for_settle<D: PageDom>(&self, dom: &D, before: &Snapshot) {
        let started = Instant::now();
        let deadline = started
            .checked_add(self.settle.timeout)
            .unwrap_or_else(|| started + MAX_SETTLE_TIMEOUT);
        let mut previous: Option<Snapshot> = None;

        while Instant::now() < deadline {
            sleep(self.settle.poll_interval.min(deadline.saturating_duration_since(Instant::now()))).await;
            let current = Snapshot::take(dom).await;
            if current.active_image != before.active_image && previous.as_ref() == Some(&current) {
                return;
            }
            previous = Some(current);
        }

        debug!("变体点击后 {:?} 内主图未稳定", self.settle.timeout);
    }
}
