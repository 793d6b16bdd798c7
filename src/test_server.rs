use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 测试服务器收到的一次请求
#[derive(Clone, Debug)]
pub(crate) struct Captured {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Captured {
    /// 按到达顺序取出指定名称的header
    pub(crate) fn headers_named(&self, names: &[&str]) -> Vec<(String, String)> {
        self.headers
            .iter()
            .filter(|(name, _)| names.contains(&name.as_str()))
            .cloned()
            .collect()
    }
}

/// 本地回环上的http服务器，记录每个请求，统一返回固定响应体
pub(crate) struct TestServer {
    addr: SocketAddr,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl TestServer {
    pub(crate) async fn start(response_body: &'static str) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let captured_clone = captured.clone();
        let make_svc = make_service_fn(move |_conn| {
            let captured = captured_clone.clone();
            async move {
                Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                    let captured = captured.clone();
                    async move {
                        let (parts, body) = req.into_parts();
                        let body = hyper::body::to_bytes(body)
                            .await
                            .map(|bytes| bytes.to_vec())
                            .unwrap_or_default();
                        let headers = parts
                            .headers
                            .iter()
                            .map(|(name, value)| {
                                (name.as_str().to_string(), value.to_str().unwrap_or("").to_string())
                            })
                            .collect();
                        captured.lock().unwrap().push(Captured {
                            method: parts.method.to_string(),
                            path: parts.uri.path().to_string(),
                            headers,
                            body,
                        });
                        Ok::<_, Infallible>(Response::new(Body::from(response_body)))
                    }
                }))
            }
        });
        let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_svc);
        let addr = server.local_addr();
        tokio::spawn(server);
        TestServer { addr, captured }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub(crate) fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

/// 原始tcp服务器，读完请求头后原样写回固定的字节然后关闭连接
///
/// 用来构造hyper不会发出的响应，比如声明的长度和实际不符。
pub(crate) async fn raw_server(response: &'static [u8]) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            // 读到请求头结束
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response).await;
            let _ = stream.shutdown().await;
        }
    });
    addr
}

/// 绕开环境里的代理设置，其余保持默认
pub(crate) fn test_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}
