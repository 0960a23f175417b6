use serde::{Deserialize, Serialize};

/// 单个变体的价格和图片快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRecord {
    pub name: String,
    pub price: f64,
    pub image: String,
}

/// 单个商品页的提取结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub url: String,
    pub title: String,
    pub collections: Vec<String>,
    pub price: f64,
    pub main_image: String,
    pub images: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub variants: Vec<VariantRecord>,
}

impl ProductRecord {
    /// 附加变体列表，返回新的记录
    pub fn with_variants(self, variants: Vec<VariantRecord>) -> Self {
        Self { variants, ..self }
    }
}

/// 推送到数据集的最终结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub urls: Vec<ProductRecord>,
}
