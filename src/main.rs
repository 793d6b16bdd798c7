use api_fanout::core::config::Config;
use tracing::debug;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let config = Config::load();
    // 单个请求的错误已经在任务里打印，这里只可能是客户端构建失败，退出码始终为0
    match api_fanout::run(&config).await {
        Ok(reports) => debug!("finished with {} reports", reports.len()),
        Err(e) => println!("Error: {:#}", e),
    }
}
