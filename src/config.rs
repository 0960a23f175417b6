use std::str::FromStr;
use std::time::Duration;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 是否以无头模式运行浏览器
    pub headless: bool,
    /// 输入文件（JSON 或 TOML）
    pub input_path: String,
    /// 数据集输出文件（JSON Lines，只追加）
    pub dataset_path: String,
    /// Chrome 可执行文件路径，为空时自动查找
    pub chrome_executable: Option<String>,
    /// 已运行浏览器的调试端口，设置后连接而不是启动
    pub browser_debug_port: Option<u16>,
    /// 点击变体后等待页面稳定的最长时间
    pub settle_timeout_ms: u64,
    /// 等待期间的轮询间隔
    pub settle_poll_interval_ms: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            headless: true,
            input_path: "INPUT.json".to_string(),
            dataset_path: "storage/datasets/default/products.jsonl".to_string(),
            chrome_executable: None,
            browser_debug_port: None,
            settle_timeout_ms: 1000,
            settle_poll_interval_ms: 100,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源构建配置，缺失或无法解析的值使用默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            headless: parse(&lookup, "HEADLESS").unwrap_or(default.headless),
            input_path: lookup("INPUT_PATH").unwrap_or(default.input_path),
            dataset_path: lookup("DATASET_PATH").unwrap_or(default.dataset_path),
            chrome_executable: lookup("CHROME_EXECUTABLE").filter(|v| !v.is_empty()),
            browser_debug_port: parse(&lookup, "BROWSER_DEBUG_PORT"),
            settle_timeout_ms: parse(&lookup, "SETTLE_TIMEOUT_MS").unwrap_or(default.settle_timeout_ms),
            settle_poll_interval_ms: parse(&lookup, "SETTLE_POLL_INTERVAL_MS")
                .unwrap_or(default.settle_poll_interval_ms),
            verbose_logging: parse(&lookup, "VERBOSE_LOGGING").unwrap_or(default.verbose_logging),
        }
    }

    pub fn settle_timeout(&self) -> Duration {
        Duration::from_millis(self.settle_timeout_ms)
    }

    pub fn settle_poll_interval(&self) -> Duration {
        Duration::from_millis(self.settle_poll_interval_ms)
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
