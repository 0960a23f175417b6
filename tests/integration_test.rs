use product_scraper::models::load_input;
use product_scraper::orchestrator::build_queue;
use product_scraper::utils::logging;
use product_scraper::{BrowserSession, Config, ProductCtx, ProductFlow, QueueRunner};

#[tokio::test]
async fn test_load_json_input_and_build_queue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("INPUT.json");
    std::fs::write(
        &path,
        r#"{"urls": [
            {"url": "https://store.example/collections/shoes/products/a"},
            {"url": "https://store.example/products/b"}
        ]}"#,
    )
    .unwrap();

    let input = load_input(&path).await.expect("加载输入失败");
    let queue = build_queue(&input).expect("队列不应为空");

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pending_count(), 2);
}

#[tokio::test]
async fn test_load_toml_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.toml");
    std::fs::write(
        &path,
        "[[urls]]\nurl = \"https://store.example/products/a\"\n\n[[urls]]\n",
    )
    .unwrap();

    let input = load_input(&path).await.expect("加载输入失败");
    assert_eq!(input.start_urls(), vec!["https://store.example/products/a"]);
}

#[tokio::test]
async fn test_empty_input_builds_no_queue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("INPUT.json");
    std::fs::write(&path, r#"{"urls": []}"#).unwrap();

    let input = load_input(&path).await.unwrap();
    assert!(build_queue(&input).is_none());
}

/// 需要本机安装 Chrome，并设置 PRODUCT_URL
#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_scrape_single_product() {
    logging::init(true);

    let url = std::env::var("PRODUCT_URL").expect("需要设置 PRODUCT_URL");
    let config = Config::from_env();

    let session = BrowserSession::open(&config).await.expect("启动浏览器失败");
    let result = ProductFlow::new(&config)
        .run(session.executor(), &ProductCtx::new(&url, 1, 1))
        .await;
    session.close().await.expect("关闭浏览器失败");

    let record = result.expect("抓取商品失败");
    assert_eq!(record.url, url);
    assert!(!record.title.is_empty());
    assert!(record.main_image.starts_with("http"));
}

#[tokio::test]
#[ignore]
async fn test_runner_skips_unreachable_url() {
    logging::init(true);

    let config = Config::from_env();
    let mut queue = product_scraper::RequestQueue::new();
    queue.add_request("http://127.0.0.1:1/products/unreachable");

    let session = BrowserSession::open(&config).await.expect("启动浏览器失败");
    let report = QueueRunner::new(&config)
        .run(&mut queue, session.executor())
        .await;
    session.close().await.expect("关闭浏览器失败");

    assert!(report.records.is_empty());
    assert_eq!(report.failed, 1);
    assert_eq!(queue.handled_count(), 1);
}
