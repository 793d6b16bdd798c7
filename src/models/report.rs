use std::io::{self, Write};
use crate::models::header::Header;

/// 单个请求的输出块
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub url: String,
    pub headers: Vec<Header>,
    /// 原始响应体，不做编码转换
    pub body: Vec<u8>,
}

impl Report {
    /// URL行、逐个header行、响应体、空行
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "URL: {}", self.url)?;
        for header in &self.headers {
            writeln!(out, "Header: {}", header)?;
        }
        out.write_all(&self.body)?;
        out.write_all(b"\n\n")
    }

    /// 渲染成完整的字节块，方便一次性写出
    pub fn render(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.url.len() + self.body.len() + 16);
        // 写入Vec不会失败
        let _ = self.write_to(&mut buffer);
        buffer
    }
}
