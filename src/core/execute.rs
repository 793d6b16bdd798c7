use anyhow::Context;
use reqwest::{Client, Response};
use tracing::debug;
use crate::core::prepare::{prepare, PreparedRequest};
use crate::models::api_endpoint::ApiEndpoint;
use crate::models::report::Report;

/// 构建共享的http客户端，全部使用默认配置
pub fn build_client() -> anyhow::Result<Client> {
    Client::builder().build().context("failed to build http client")
}

/// 执行单个请求描述并生成输出块
///
/// 错误不会向外抛出，直接打印到标准输出。构建请求或发送失败时不再读取响应体，返回None；
/// 读取响应体失败时打印错误，输出块的响应体为空。不支持的方法什么都不做。
pub async fn check_url(client: &Client, endpoint: &ApiEndpoint) -> Option<Report> {
    let request = match prepare(endpoint) {
        Ok(Some(request)) => request,
        Ok(None) => {
            debug!("skipping {} {}: unsupported method", endpoint.method, endpoint.url);
            return None;
        }
        Err(e) => {
            println!("{:#}", e);
            return None;
        }
    };
    let response = match send(client, &request).await {
        Ok(response) => response,
        Err(e) => {
            println!("{:#}", e);
            return None;
        }
    };
    let body = match read_body(response).await {
        Ok(body) => body,
        Err(e) => {
            println!("{:#}", e);
            Vec::new()
        }
    };
    Some(Report {
        url: request.url,
        headers: request.headers,
        body,
    })
}

async fn send(client: &Client, request: &PreparedRequest) -> anyhow::Result<Response> {
    let mut builder = client.request(request.method.clone(), &request.url);
    // header是追加的，同名的多个值都会发出去
    for header in &request.headers {
        builder = builder.header(header.key.as_str(), header.value.as_str());
    }
    if let Some(ref body) = request.body {
        builder = builder.body(body.clone());
    }
    let built = builder
        .build()
        .with_context(|| format!("failed to build {} request to {}", request.method, request.url))?;
    debug!("sending {} {}", request.method, request.url);
    let response = client
        .execute(built)
        .await
        .with_context(|| format!("{} {} failed", request.method, request.url))?;
    debug!("{} {} responded with {}", request.method, request.url, response.status());
    Ok(response)
}

// 响应体整体读入内存，字节原样保留
async fn read_body(response: Response) -> anyhow::Result<Vec<u8>> {
    let url = response.url().to_string();
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("failed to read response body from {}", url))?;
    Ok(bytes.to_vec())
}
