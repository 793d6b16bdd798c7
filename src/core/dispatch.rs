use std::io::{self, Write};
use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, error};
use crate::core::execute::check_url;
use crate::models::api_endpoint::ApiEndpoint;
use crate::models::report::Report;

/// 每个请求描述开一个任务，全部完成后返回
///
/// 每个任务自己打印输出块，返回值是所有成功生成的输出块，顺序和完成顺序无关，按描述的顺序排列。
pub async fn dispatch(client: Client, endpoints: Vec<ApiEndpoint>) -> Vec<Report> {
    let total = endpoints.len();
    let mut handles = Vec::with_capacity(total);
    for endpoint in endpoints {
        // 客户端副本，内部共享连接池
        let client = client.clone();
        let handle = tokio::spawn(async move {
            let report = check_url(&client, &endpoint).await;
            if let Some(ref report) = report {
                print_report(report);
            }
            report
        });
        handles.push(handle);
    }
    // 等待所有任务完成
    let mut reports = Vec::with_capacity(total);
    for result in join_all(handles).await {
        match result {
            Ok(Some(report)) => reports.push(report),
            Ok(None) => {}
            Err(e) => error!("request task failed: {}", e),
        }
    }
    debug!("{} of {} requests produced a report", reports.len(), total);
    reports
}

// 整块一次写出，避免不同任务的输出按行交错
fn print_report(report: &Report) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout
        .write_all(&report.render())
        .and_then(|_| stdout.flush())
    {
        error!("failed to write report for {}: {}", report.url, e);
    }
}
