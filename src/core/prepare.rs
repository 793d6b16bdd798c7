use anyhow::Context;
use reqwest::Method;
use crate::models::api_endpoint::ApiEndpoint;
use crate::models::header::Header;
use crate::models::http_method::HttpMethod;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// 真正要发出去的请求
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<Header>,
    pub body: Option<Vec<u8>>,
}

/// 根据请求描述构建待发送的请求，不支持的方法返回None
pub fn prepare(endpoint: &ApiEndpoint) -> anyhow::Result<Option<PreparedRequest>> {
    match &endpoint.method {
        HttpMethod::Get => Ok(Some(prepare_get(endpoint))),
        HttpMethod::Post => prepare_post(endpoint).map(Some),
        HttpMethod::Other(_) => Ok(None),
    }
}

fn prepare_get(endpoint: &ApiEndpoint) -> PreparedRequest {
    PreparedRequest {
        method: Method::GET,
        url: endpoint.url.clone(),
        headers: endpoint.headers.clone(),
        body: None,
    }
}

fn prepare_post(endpoint: &ApiEndpoint) -> anyhow::Result<PreparedRequest> {
    let mut headers = endpoint.headers.clone();
    let mut body = None;
    // json只加Content-Type，不写请求体；form才会序列化成json作为请求体
    if endpoint.json.is_some() {
        headers.push(Header::new("Content-Type", CONTENT_TYPE_JSON));
    } else if let Some(ref form_data) = endpoint.form_data {
        let bytes = serde_json::to_vec(form_data).context("failed to serialize form data")?;
        headers.push(Header::new("Content-Type", CONTENT_TYPE_JSON));
        body = Some(bytes);
    }
    Ok(PreparedRequest {
        method: Method::POST,
        url: endpoint.url.clone(),
        headers,
        body,
    })
}
