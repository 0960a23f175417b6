//! 内存中的假页面，供单元测试驱动提取流程

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{ScrapeError, ScrapeResult};
use crate::infrastructure::dom::PageDom;

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub text: Option<String>,
    pub attrs: HashMap<String, String>,
    /// (内部选择器, 属性) -> 值
    pub nested: HashMap<(String, String), String>,
}

impl FakeElement {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    pub fn attr(name: &str, value: &str) -> Self {
        Self::default().with_attr(name, value)
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_nested(mut self, nested: &str, attribute: &str, value: &str) -> Self {
        self.nested
            .insert((nested.to_string(), attribute.to_string()), value.to_string());
        self
    }
}

type Replacement = (String, Vec<FakeElement>);

#[derive(Debug, Clone, Default)]
pub struct FakeDocument {
    elements: HashMap<String, Vec<FakeElement>>,
    on_click: HashMap<(String, usize), Vec<Replacement>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, selector: &str, elements: Vec<FakeElement>) -> Self {
        self.elements.insert(selector.to_string(), elements);
        self
    }

    /// 点击 `selector` 的第 `index` 个元素后，用 `elements` 替换 `target` 的匹配结果
    pub fn on_click(
        mut self,
        selector: &str,
        index: usize,
        target: &str,
        elements: Vec<FakeElement>,
    ) -> Self {
        self.on_click
            .entry((selector.to_string(), index))
            .or_default()
            .push((target.to_string(), elements));
        self
    }

    fn first(&self, selector: &str) -> Option<&FakeElement> {
        self.elements.get(selector).and_then(|els| els.first())
    }
}

#[derive(Debug, Default)]
struct FakeState {
    current: Option<FakeDocument>,
    navigations: Vec<String>,
    clicks: Vec<(String, usize)>,
}

/// 按 URL 提供文档的假页面
#[derive(Debug, Default)]
pub struct FakePage {
    documents: HashMap<String, FakeDocument>,
    state: Mutex<FakeState>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已加载单个文档的页面
    pub fn loaded(document: FakeDocument) -> Self {
        let page = Self::new();
        page.state.lock().unwrap().current = Some(document);
        page
    }

    pub fn with_document(mut self, url: &str, document: FakeDocument) -> Self {
        self.documents.insert(url.to_string(), document);
        self
    }

    pub fn navigations(&self) -> Vec<String> {
        self.state.lock().unwrap().navigations.clone()
    }

    pub fn clicks(&self) -> Vec<(String, usize)> {
        self.state.lock().unwrap().clicks.clone()
    }

    fn read<T>(&self, f: impl FnOnce(&FakeDocument) -> T) -> ScrapeResult<T>
    where
        T: Default,
    {
        let state = self.state.lock().unwrap();
        Ok(state.current.as_ref().map(f).unwrap_or_default())
    }
}

impl PageDom for FakePage {
    async fn navigate(&self, url: &str) -> ScrapeResult<()> {
        let mut state = self.state.lock().unwrap();
        state.navigations.push(url.to_string());
        match self.documents.get(url) {
            Some(document) => {
                state.current = Some(document.clone());
                Ok(())
            }
            None => {
                state.current = None;
                Err(ScrapeError::navigation(url, "net::ERR_NAME_NOT_RESOLVED"))
            }
        }
    }

    async fn text_of(&self, selector: &str) -> ScrapeResult<Option<String>> {
        self.read(|doc| doc.first(selector).and_then(|el| el.text.clone()))
    }

    async fn attr_of(&self, selector: &str, attribute: &str) -> ScrapeResult<Option<String>> {
        self.read(|doc| {
            doc.first(selector)
                .and_then(|el| el.attrs.get(attribute).cloned())
        })
    }

    async fn attrs_of_all(
        &self,
        selector: &str,
        attribute: &str,
    ) -> ScrapeResult<Vec<Option<String>>> {
        self.read(|doc| {
            doc.elements
                .get(selector)
                .map(|els| els.iter().map(|el| el.attrs.get(attribute).cloned()).collect())
                .unwrap_or_default()
        })
    }

    async fn count(&self, selector: &str) -> ScrapeResult<usize> {
        self.read(|doc| doc.elements.get(selector).map_or(0, Vec::len))
    }

    async fn click_nth(&self, selector: &str, index: usize) -> ScrapeResult<()> {
        let mut state = self.state.lock().unwrap();
        state.clicks.push((selector.to_string(), index));
        let document = state
            .current
            .as_mut()
            .filter(|doc| doc.elements.get(selector).map_or(0, Vec::len) > index)
            .ok_or_else(|| ScrapeError::missing_element(format!("{}[{}]", selector, index)))?;

        if let Some(replacements) = document.on_click.get(&(selector.to_string(), index)).cloned() {
            for (target, elements) in replacements {
                document.elements.insert(target, elements);
            }
        }
        Ok(())
    }

    async fn nested_attr_of_nth(
        &self,
        selector: &str,
        index: usize,
        nested: &str,
        attribute: &str,
    ) -> ScrapeResult<Option<String>> {
        self.read(|doc| {
            doc.elements
                .get(selector)
                .and_then(|els| els.get(index))
                .and_then(|el| el.nested.get(&(nested.to_string(), attribute.to_string())).cloned())
        })
    }
}
