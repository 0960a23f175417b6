//! 数据集写入服务
//!
//! 只负责把最终结果追加到数据集文件，不关心流程

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::models::DatasetEntry;

/// 数据集写入服务
///
/// 每次 push 追加一行 JSON，已有内容不会被改写。
pub struct DatasetWriter {
    dataset_path: PathBuf,
}

impl DatasetWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dataset_path
    }

    /// 追加一条数据
    pub async fn push(&self, entry: &DatasetEntry) -> Result<()> {
        debug!(
            "写入数据集: {} | 商品数: {}",
            self.dataset_path.display(),
            entry.urls.len()
        );

        if let Some(parent) = self.dataset_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("无法创建目录: {}", parent.display()))?;
        }

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.dataset_path)
            .await
            .with_context(|| format!("无法打开数据集文件: {}", self.dataset_path.display()))?;

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
