use serde_json::Value;
use crate::core::config::Config;
use crate::models::api_endpoint::{ApiEndpoint, Payload};

// 直接按键值对构建载荷，结构上只能是对象
macro_rules! payload {
    ($($key:literal => $value:expr),* $(,)?) => {{
        let mut map = Payload::new();
        $( map.insert($key.to_string(), Value::from($value)); )*
        map
    }};
}

const JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";
const RUANGAPI_BASE: &str = "https://ruangapi.com/api/v1";

/// 固定的请求列表
pub fn default_endpoints(config: &Config) -> Vec<ApiEndpoint> {
    let auth = |endpoint: ApiEndpoint| endpoint.header("Authorization", config.api_key.as_str());
    vec![
        ApiEndpoint::get(JOKE_URL),
        auth(ApiEndpoint::get(format!("{}/provinces", RUANGAPI_BASE))),
        auth(ApiEndpoint::post(format!("{}/search-engine", RUANGAPI_BASE)))
            .form_data(payload!("url" => "https://soizee.com", "se" => "google")),
        auth(ApiEndpoint::post(format!("{}/shopee", RUANGAPI_BASE)))
            .form_data(payload!("username" => "muhammadhendra", "take" => "50")),
        auth(ApiEndpoint::post(format!("{}/currency", RUANGAPI_BASE)))
            .form_data(payload!("code" => "gold-antam")),
    ]
}
