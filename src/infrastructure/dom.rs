//! 页面能力抽象
//!
//! 提取和变体展开只依赖这些能力，不直接接触 `Page`。

use crate::error::ScrapeResult;

/// 对已渲染页面的读取、点击与导航能力
///
/// 读取方法在元素不存在（或属性缺失）时返回 `Ok(None)`，
/// 只有浏览器本身出错才返回 `Err`。
#[allow(async_fn_in_trait)]
pub trait PageDom {
    /// 导航到指定 URL 并等待加载完成
    async fn navigate(&self, url: &str) -> ScrapeResult<()>;

    /// 第一个匹配元素的 innerText
    async fn text_of(&self, selector: &str) -> ScrapeResult<Option<String>>;

    /// 第一个匹配元素的属性值
    async fn attr_of(&self, selector: &str, attribute: &str) -> ScrapeResult<Option<String>>;

    /// 所有匹配元素的属性值，按 DOM 顺序
    async fn attrs_of_all(
        &self,
        selector: &str,
        attribute: &str,
    ) -> ScrapeResult<Vec<Option<String>>>;

    /// 匹配元素数量
    async fn count(&self, selector: &str) -> ScrapeResult<usize>;

    /// 点击第 `index` 个匹配元素（从 0 开始）
    async fn click_nth(&self, selector: &str, index: usize) -> ScrapeResult<()>;

    /// 第 `index` 个匹配元素内部 `nested` 元素的属性值
    async fn nested_attr_of_nth(
        &self,
        selector: &str,
        index: usize,
        nested: &str,
        attribute: &str,
    ) -> ScrapeResult<Option<String>>;
}
