use std::env;
use std::path::Path;
use tracing::debug;

/// 环境变量名
pub const API_KEY_VAR: &str = "API_KEY";
/// 默认的.env文件
pub const DEFAULT_ENV_FILE: &str = ".env";

/// 运行配置，启动时读取一次，之后只读
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Config { api_key: api_key.into() }
    }

    /// 从当前目录的.env和进程环境变量加载
    pub fn load() -> Self {
        Self::from_env_file(DEFAULT_ENV_FILE)
    }

    pub fn from_env_file(path: impl AsRef<Path>) -> Self {
        Self::resolve(env::var(API_KEY_VAR).ok(), path.as_ref())
    }

    // 进程环境变量优先，.env只补充缺失的值
    fn resolve(from_env: Option<String>, path: &Path) -> Self {
        if let Some(api_key) = from_env {
            debug!("{} taken from process environment", API_KEY_VAR);
            return Config::new(api_key);
        }
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => {
                debug!("no env file at {}, {} left empty", path.display(), API_KEY_VAR);
                return Config::default();
            }
            Err(e) => {
                debug!("failed to open env file {}: {}", path.display(), e);
                return Config::default();
            }
        };
        // 解析失败的行直接跳过
        let api_key = iter
            .filter_map(|item| match item {
                Ok(pair) => Some(pair),
                Err(e) => {
                    debug!("ignoring malformed line in {}: {}", path.display(), e);
                    None
                }
            })
            .filter(|(key, _)| key == API_KEY_VAR)
            .map(|(_, value)| value)
            .last()
            .unwrap_or_default();
        debug!("{} loaded from {}", API_KEY_VAR, path.display());
        Config::new(api_key)
    }
}
