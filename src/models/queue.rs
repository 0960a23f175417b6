//! 请求队列
//!
//! 先进先出，每个 URL 只入队一次。出队得到的 [`PendingRequest`] 在离开作用域时
//! 自动把条目标记为已处理，成功和失败路径都一样。

use std::collections::HashSet;

/// 队列中的单个条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem {
    pub url: String,
    pub handled: bool,
}

impl QueueItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            handled: false,
        }
    }
}

/// 请求队列
#[derive(Debug, Default)]
pub struct RequestQueue {
    items: Vec<QueueItem>,
    seen: HashSet<String>,
    cursor: usize,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入队一个 URL
    ///
    /// # 返回
    /// URL 已在队列中时返回 `false`，不会重复入队
    pub fn add_request(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if !self.seen.insert(url.clone()) {
            return false;
        }
        self.items.push(QueueItem::new(url));
        true
    }

    /// 取出下一个待处理条目
    pub fn fetch_next(&mut self) -> Option<PendingRequest<'_>> {
        while self.cursor < self.items.len() {
            let index = self.cursor;
            self.cursor += 1;
            if !self.items[index].handled {
                return Some(PendingRequest { queue: self, index });
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn handled_count(&self) -> usize {
        self.items.iter().filter(|item| item.handled).count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.handled_count()
    }

    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    fn mark_handled(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.handled = true;
        }
    }
}

/// 正在处理的请求
///
/// drop 时把对应条目标记为已处理。
#[derive(Debug)]
pub struct PendingRequest<'q> {
    queue: &'q mut RequestQueue,
    index: usize,
}

impl PendingRequest<'_> {
    pub fn url(&self) -> &str {
        &self.queue.items[self.index].url
    }

    /// 在队列中的位置（从 1 开始）
    pub fn position(&self) -> usize {
        self.index + 1
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        self.queue.mark_handled(self.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order_and_handled_on_drop() {
        let mut queue = RequestQueue::new();
        queue.add_request("https://a.example/products/1");
        queue.add_request("https://a.example/products/2");

        let mut seen = Vec::new();
        while let Some(request) = queue.fetch_next() {
            seen.push(request.url().to_string());
            assert_eq!(request.queue.handled_count(), seen.len() - 1);
        }

        assert_eq!(
            seen,
            vec!["https://a.example/products/1", "https://a.example/products/2"]
        );
        assert_eq!(queue.handled_count(), 2);
        assert_eq!(queue.pending_count(), 0);
        assert!(queue.fetch_next().is_none());
    }

    #[test]
    fn test_duplicate_url_enqueued_once() {
        let mut queue = RequestQueue::new();
        assert!(queue.add_request("https://a.example/products/1"));
        assert!(!queue.add_request("https://a.example/products/1"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_handled_even_when_processing_panics() {
        let mut queue = RequestQueue::new();
        queue.add_request("https://a.example/products/1");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _request = queue.fetch_next();
            panic!("提取失败");
        }));

        assert!(result.is_err());
        assert_eq!(queue.handled_count(), 1);
        assert!(queue.items()[0].handled);
    }

    #[test]
    fn test_position_is_one_based() {
        let mut queue = RequestQueue::new();
        queue.add_request("https://a.example/x");
        let request = queue.fetch_next().unwrap();
        assert_eq!(request.position(), 1);
    }
}
