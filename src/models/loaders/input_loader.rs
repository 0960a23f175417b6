use crate::models::input::ActorInput;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从文件加载程序输入
///
/// 根据扩展名选择格式：`.toml` 按 TOML 解析，其余按 JSON 解析。
/// 文件不存在时返回空输入。
pub async fn load_input(input_path: &Path) -> Result<ActorInput> {
    if !fs::try_exists(input_path).await.unwrap_or(false) {
        tracing::info!("输入文件不存在: {}", input_path.display());
        return Ok(ActorInput::default());
    }

    let content = fs::read_to_string(input_path)
        .await
        .with_context(|| format!("无法读取输入文件: {}", input_path.display()))?;

    parse_input(&content, input_path)
}

fn parse_input(content: &str, input_path: &Path) -> Result<ActorInput> {
    if content.trim().is_empty() {
        return Ok(ActorInput::default());
    }

    let is_toml = input_path.extension().and_then(|s| s.to_str()) == Some("toml");
    let input: ActorInput = if is_toml {
        toml::from_str(content)
            .with_context(|| format!("无法解析TOML输入: {}", input_path.display()))?
    } else {
        serde_json::from_str(content)
            .with_context(|| format!("无法解析JSON输入: {}", input_path.display()))?
    };

    Ok(input)
}
