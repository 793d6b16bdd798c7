pub mod api_endpoint;
pub mod header;
pub mod http_method;
pub mod report;
