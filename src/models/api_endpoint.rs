use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::models::header::Header;
use crate::models::http_method::HttpMethod;

/// 请求体载荷，键为字符串，值为任意json值
pub type Payload = Map<String, Value>;

/// 一次外呼请求的描述，启动时构建，之后只读
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<Header>,
    pub json: Option<Payload>,
    pub form_data: Option<Payload>,
}

impl ApiEndpoint {
    pub fn get(url: impl Into<String>) -> Self {
        ApiEndpoint {
            url: url.into(),
            method: HttpMethod::Get,
            headers: Vec::new(),
            json: None,
            form_data: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        ApiEndpoint {
            method: HttpMethod::Post,
            ..ApiEndpoint::get(url)
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(key, value));
        self
    }

    pub fn json(mut self, json: Payload) -> Self {
        self.json = Some(json);
        self
    }

    pub fn form_data(mut self, form_data: Payload) -> Self {
        self.form_data = Some(form_data);
        self
    }
}
