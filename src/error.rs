use std::num::ParseFloatError;

use thiserror::Error;

/// 单个商品抓取过程中的错误
///
/// 所有变体都在队列运行器的单条边界处被捕获并记录，不会中断整个运行。
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// 选择器没有匹配到任何元素
    #[error("元素不存在: {selector}")]
    MissingElement { selector: String },

    /// 元素存在，但缺少所需属性
    #[error("元素 {selector} 缺少属性 {attribute}")]
    MissingAttribute { selector: String, attribute: String },

    /// 价格文本无法转换为数字
    #[error("价格解析失败: '{text}'")]
    PriceParse {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// 字段的所有候选策略都失败
    #[error("字段 {field} 的所有候选选择器均失败: [{}]", .attempts.join("; "))]
    FallbackExhausted {
        field: &'static str,
        attempts: Vec<String>,
    },

    /// 导航失败
    #[error("导航到 {url} 失败")]
    Navigation {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// CDP 调用失败
    #[error("浏览器错误: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    /// 脚本返回值无法解析
    #[error("脚本返回值解析失败: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    /// 创建元素缺失错误
    pub fn missing_element(selector: impl Into<String>) -> Self {
        ScrapeError::MissingElement {
            selector: selector.into(),
        }
    }

    /// 创建属性缺失错误
    pub fn missing_attribute(selector: impl Into<String>, attribute: impl Into<String>) -> Self {
        ScrapeError::MissingAttribute {
            selector: selector.into(),
            attribute: attribute.into(),
        }
    }

    /// 创建导航错误
    pub fn navigation(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ScrapeError::Navigation {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// 抓取结果类型
pub type ScrapeResult<T> = Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_exhausted_lists_attempts() {
        let err = ScrapeError::FallbackExhausted {
            field: "price",
            attempts: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.to_string(), "字段 price 的所有候选选择器均失败: [a; b]");
    }

    #[test]
    fn test_price_parse_keeps_source() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = ScrapeError::PriceParse {
            text: "abc".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_navigation_keeps_cause_chain() {
        let err = ScrapeError::navigation("https://store.example/p", "net::ERR_NAME_NOT_RESOLVED");
        assert_eq!(err.to_string(), "导航到 https://store.example/p 失败");

        let chain = format!("{:?}", anyhow::Error::new(err));
        assert!(chain.contains("net::ERR_NAME_NOT_RESOLVED"));
    }
}
