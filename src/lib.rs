pub mod models;
pub mod core;
#[cfg(test)]
pub(crate) mod test_server;

use crate::core::config::Config;
use crate::core::dispatch::dispatch;
use crate::core::endpoints::default_endpoints;
use crate::core::execute::build_client;
use crate::models::report::Report;

/// 按配置构建固定的请求列表，并发执行并打印全部结果
pub async fn run(config: &Config) -> anyhow::Result<Vec<Report>> {
    let client = build_client()?;
    let endpoints = default_endpoints(config);
    Ok(dispatch(client, endpoints).await)
}
