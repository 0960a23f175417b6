//! JS 执行器 - 基础设施层
//!
//! 持有唯一的 page 资源，对外暴露 DOM 读取、点击和导航能力

use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{ScrapeError, ScrapeResult};
use crate::infrastructure::dom::PageDom;

/// JS 执行器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 通过 eval 读取 DOM
/// - 不认识 ProductRecord
/// - 不处理业务流程
pub struct JsExecutor {
    page: Page,
}

/// 脚本统一返回 `{ value }`，避免顶层 null 无法反序列化
#[derive(Debug, Deserialize)]
struct Lookup<T> {
    value: Option<T>,
}

impl JsExecutor {
    /// 创建新的 JS 执行器
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> ScrapeResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value: JsonValue = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> ScrapeResult<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    async fn lookup<T: DeserializeOwned>(&self, js_code: String) -> ScrapeResult<Option<T>> {
        let lookup: Lookup<T> = self.eval_as(js_code).await?;
        Ok(lookup.value)
    }
}

impl PageDom for JsExecutor {
    /// 导航在独立任务中执行，调用方只等待其完成
    async fn navigate(&self, url: &str) -> ScrapeResult<()> {
        debug!("导航到: {}", url);
        let page = self.page.clone();
        let target = url.to_string();

        let navigation = tokio::spawn(async move { page.goto(target).await.map(|_| ()) });

        match navigation.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(ScrapeError::navigation(url, e)),
            Err(e) => Err(ScrapeError::navigation(url, e)),
        }
    }

    async fn text_of(&self, selector: &str) -> ScrapeResult<Option<String>> {
        let js_code = format!(
            r#"
            (() => {{
                const el = document.querySelector({});
                return {{ value: el ? el.innerText : null }};
            }})()
            "#,
            serde_json::to_string(selector)?
        );
        self.lookup(js_code).await
    }

    async fn attr_of(&self, selector: &str, attribute: &str) -> ScrapeResult<Option<String>> {
        let js_code = format!(
            r#"
            (() => {{
                const el = document.querySelector({});
                return {{ value: el ? el.getAttribute({}) : null }};
            }})()
            "#,
            serde_json::to_string(selector)?,
            serde_json::to_string(attribute)?
        );
        self.lookup(js_code).await
    }

    async fn attrs_of_all(
        &self,
        selector: &str,
        attribute: &str,
    ) -> ScrapeResult<Vec<Option<String>>> {
        let js_code = format!(
            r#"
            (() => {{
                const attr = {};
                return {{
                    value: Array.from(document.querySelectorAll({})).map(el => el.getAttribute(attr))
                }};
            }})()
            "#,
            serde_json::to_string(attribute)?,
            serde_json::to_string(selector)?
        );
        Ok(self.lookup(js_code).await?.unwrap_or_default())
    }

    async fn count(&self, selector: &str) -> ScrapeResult<usize> {
        let js_code = format!(
            "(() => ({{ value: document.querySelectorAll({}).length }}))()",
            serde_json::to_string(selector)?
        );
        Ok(self.lookup(js_code).await?.unwrap_or(0))
    }

    /// 使用真实的鼠标事件点击，而不是 `el.click()`
    async fn click_nth(&self, selector: &str, index: usize) -> ScrapeResult<()> {
        let element = self
            .page
            .find_elements(selector)
            .await?
            .into_iter()
            .nth(index)
            .ok_or_else(|| ScrapeError::missing_element(format!("{}[{}]", selector, index)))?;
        element.click().await?;
        Ok(())
    }

    async fn nested_attr_of_nth(
        &self,
        selector: &str,
        index: usize,
        nested: &str,
        attribute: &str,
    ) -> ScrapeResult<Option<String>> {
        // 优先读取 DOM 属性（如 input.value），没有时再读 HTML 特性
        let js_code = format!(
            r#"
            (() => {{
                const attr = {attr};
                const el = document.querySelectorAll({selector})[{index}];
                const inner = el ? el.querySelector({nested}) : null;
                if (!inner) return {{ value: null }};
                const prop = inner[attr];
                return {{ value: prop === undefined || prop === null ? inner.getAttribute(attr) : String(prop) }};
            }})()
            "#,
            attr = serde_json::to_string(attribute)?,
            selector = serde_json::to_string(selector)?,
            index = index,
            nested = serde_json::to_string(nested)?
        );
        self.lookup(js_code).await
    }
}
