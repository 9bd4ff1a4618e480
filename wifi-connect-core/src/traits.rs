use crate::structs::{ConnectionRequest, NetworkEntry};
use async_trait::async_trait;

// 在这里定义配网后端 API 的 trait，控制器只通过它访问网络。

/// The provisioning backend as seen from the connect page.
/// 配网后端接口：扫描列表 + 提交连接请求。
///
/// `Send + Sync` is required because calls run on spawned tasks.
#[async_trait]
pub trait NetworkApi: Send + Sync {
    /// Fetches the current scan results (`GET /networks`).
    async fn list_networks(&self) -> crate::Result<Vec<NetworkEntry>>;

    /// Submits credentials (`POST /connect`).
    ///
    /// # Returns
    /// The backend's JSON reply, uninterpreted.
    async fn connect(&self, request: &ConnectionRequest) -> crate::Result<serde_json::Value>;
}
