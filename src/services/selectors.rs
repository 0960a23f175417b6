//! 商品页的 CSS 选择器与候选链
//!
//! 页面结构变化时只需修改这里。

use crate::error::{ScrapeError, ScrapeResult};
use crate::infrastructure::PageDom;

pub const TITLE: &str = ".product-single__title";
pub const SALE_PRICE: &str = ".product-single__prices .sale-price";
pub const REGULAR_PRICE: &str = ".product-single__prices .product__price";
pub const ACTIVE_SLIDE_IMAGE: &str = ".product__slide.slick-active img";
pub const SLIDE_IMAGE: &str = ".product__slide img";
pub const DESCRIPTION: &str = ".product-single__description";
pub const VARIANT_INPUT: &str = ".variant-input";
pub const VARIANT_VALUE_INPUT: &str = "input";

pub const IMAGE_SOURCE_ATTR: &str = "data-photoswipe-src";

/// 单个读取策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// 读取第一个匹配元素的 innerText
    Text(&'static str),
    /// 读取第一个匹配元素的属性
    Attr {
        selector: &'static str,
        attribute: &'static str,
    },
}

impl Strategy {
    /// 执行策略，元素或属性缺失时返回错误
    pub async fn read<D: PageDom>(&self, dom: &D) -> ScrapeResult<String> {
        match *self {
            Strategy::Text(selector) => dom
                .text_of(selector)
                .await?
                .ok_or_else(|| ScrapeError::missing_element(selector)),
            Strategy::Attr {
                selector,
                attribute,
            } => dom
                .attr_of(selector, attribute)
                .await?
                .ok_or_else(|| ScrapeError::missing_attribute(selector, attribute)),
        }
    }
}

/// 字段的有序候选链
#[derive(Debug, Clone, Copy)]
pub struct FallbackChain {
    pub field: &'static str,
    pub strategies: &'static [Strategy],
}

pub const TITLE_CHAIN: FallbackChain = FallbackChain {
    field: "title",
    strategies: &[Strategy::Text(TITLE)],
};

/// 先取促销价，再取原价
pub const PRICE_CHAIN: FallbackChain = FallbackChain {
    field: "price",
    strategies: &[Strategy::Text(SALE_PRICE), Strategy::Text(REGULAR_PRICE)],
};

/// 先取当前轮播图，再取第一张轮播图
pub const MAIN_IMAGE_CHAIN: FallbackChain = FallbackChain {
    field: "main_image",
    strategies: &[
        Strategy::Attr {
            selector: ACTIVE_SLIDE_IMAGE,
            attribute: IMAGE_SOURCE_ATTR,
        },
        Strategy::Attr {
            selector: SLIDE_IMAGE,
            attribute: IMAGE_SOURCE_ATTR,
        },
    ],
};

pub const DESCRIPTION_CHAIN: FallbackChain = FallbackChain {
    field: "description",
    strategies: &[Strategy::Text(DESCRIPTION)],
};
