use serde::{Deserialize, Serialize};
use tracing::warn;

/// 单个起始 URL
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartUrl {
    #[serde(default)]
    pub url: Option<String>,
}

/// 程序输入
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorInput {
    #[serde(default)]
    pub urls: Vec<StartUrl>,
}

impl ActorInput {
    /// 所有有效的起始 URL，缺少 url 的条目会被跳过
    pub fn start_urls(&self) -> Vec<String> {
        self.urls
            .iter()
            .enumerate()
            .filter_map(|(index, start)| match start.url.as_deref().map(str::trim) {
                Some(url) if !url.is_empty() => Some(url.to_string()),
                _ => {
                    warn!("⚠️ 第 {} 个起始条目缺少 url，已跳过", index + 1);
                    None
                }
            })
            .collect()
    }
}
