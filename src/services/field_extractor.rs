//! 字段提取服务 - 业务能力层
//!
//! 只负责从已加载的商品页读取字段，不关心队列和变体

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ScrapeError, ScrapeResult};
use crate::infrastructure::PageDom;
use crate::models::ProductRecord;
use crate::services::selectors::{
    self, FallbackChain, DESCRIPTION_CHAIN, MAIN_IMAGE_CHAIN, PRICE_CHAIN, TITLE_CHAIN,
};

/// 价格文本中需要去掉的货币符号
static CURRENCY_TOKENS: phf::Set<&'static str> = phf::phf_set! {
    "$",
    "Rs.",
};

/// 缩略图裁剪后缀，如 `_114x144_crop_center`
static THUMBNAIL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_\d+x\d+_crop_center").unwrap());

/// 字段提取服务
///
/// 职责：
/// - 按候选链读取标题、价格、图片、描述
/// - 只处理当前页面
/// - 不填充 variants
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 提取商品基础字段（variants 为空）
    pub async fn extract<D: PageDom>(&self, dom: &D, url: &str) -> ScrapeResult<ProductRecord> {
        let collections = parse_collections(url);
        let title = resolve(dom, &TITLE_CHAIN, |raw| Ok(raw.trim().to_string())).await?;
        let price = self.extract_price(dom).await?;
        let main_image = self.extract_main_image(dom).await?;
        let images = self.extract_images(dom).await?;
        let description =
            resolve(dom, &DESCRIPTION_CHAIN, |raw| Ok(raw.trim().to_string())).await?;

        debug!(
            "提取完成: {} | 价格 {} | 图片 {} 张",
            title,
            price,
            images.len()
        );

        Ok(ProductRecord {
            url: url.to_string(),
            title,
            collections,
            price,
            main_image,
            images,
            description,
            variants: Vec::new(),
        })
    }

    pub async fn extract_price<D: PageDom>(&self, dom: &D) -> ScrapeResult<f64> {
        resolve(dom, &PRICE_CHAIN, |raw| parse_price(&raw)).await
    }

    pub async fn extract_main_image<D: PageDom>(&self, dom: &D) -> ScrapeResult<String> {
        resolve(dom, &MAIN_IMAGE_CHAIN, |raw| Ok(absolutize(&raw))).await
    }

    /// 所有轮播图，保持 DOM 顺序，不去重
    async fn extract_images<D: PageDom>(&self, dom: &D) -> ScrapeResult<Vec<String>> {
        dom.attrs_of_all(selectors::SLIDE_IMAGE, selectors::IMAGE_SOURCE_ATTR)
            .await?
            .into_iter()
            .map(|src| {
                let src = src.ok_or_else(|| {
                    ScrapeError::missing_attribute(
                        selectors::SLIDE_IMAGE,
                        selectors::IMAGE_SOURCE_ATTR,
                    )
                })?;
                Ok(absolutize(&strip_thumbnail_suffix(&src)))
            })
            .collect()
    }
}

/// 依次尝试候选链中的策略，第一个成功的结果胜出
async fn resolve<D, T>(
    dom: &D,
    chain: &FallbackChain,
    parse: impl Fn(String) -> ScrapeResult<T>,
) -> ScrapeResult<T>
where
    D: PageDom,
{
    let mut attempts = Vec::with_capacity(chain.strategies.len());

    for strategy in chain.strategies {
        match strategy.read(dom).await.and_then(&parse) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("字段 {} 候选失败: {}", chain.field, e);
                attempts.push(e.to_string());
            }
        }
    }

    Err(ScrapeError::FallbackExhausted {
        field: chain.field,
        attempts,
    })
}

/// 从 URL 中解析 `collections/` 后的分类段
pub fn parse_collections(url: &str) -> Vec<String> {
    match url.split_once("collections/") {
        Some((_, rest)) => {
            let segment = rest.split('/').next().unwrap_or_default();
            vec![segment.to_string()]
        }
        None => Vec::new(),
    }
}

/// 去掉货币符号和千位分隔符后解析价格
pub fn parse_price(text: &str) -> ScrapeResult<f64> {
    let mut cleaned = text.replace(',', "");
    for token in CURRENCY_TOKENS.iter() {
        cleaned = cleaned.replace(token, "");
    }

    cleaned
        .trim()
        .parse::<f64>()
        .map_err(|source| ScrapeError::PriceParse {
            text: text.to_string(),
            source,
        })
}

/// 协议相对地址（`//cdn...`）补全为 https
pub fn absolutize(src: &str) -> String {
    if src.starts_with("//") {
        format!("https:{}", src)
    } else {
        src.to_string()
    }
}

pub fn strip_thumbnail_suffix(src: &str) -> String {
    THUMBNAIL_SUFFIX.replace_all(src, "").into_owned()
}
