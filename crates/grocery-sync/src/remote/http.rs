//! HTTP implementation of the remote store client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;

use super::{GroceryRemote, RemoteResult};
use crate::config::SyncConfig;
use crate::error::RemoteError;
use crate::model::{HistoryRecord, Item, ItemDraft, ItemId};

// ========================
// Response Bodies
// ========================

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

// ========================
// Client
// ========================

/// JSON-over-HTTP client for the grocery API
#[derive(Clone, Debug)]
pub struct HttpRemote {
    client: Client,
    config: SyncConfig,
}

impl HttpRemote {
    pub fn new(config: SyncConfig) -> RemoteResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> RemoteResult<T> {
        let response = request.send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Turn a non-2xx response into `RemoteError::Status`, preferring the
/// server's `{"error": ...}` message.
async fn check_status(response: Response) -> RemoteResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let fallback = status.canonical_reason().unwrap_or("request failed").to_string();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => fallback,
    };
    log::warn!("[REMOTE] {} {}", status.as_u16(), message);
    Err(RemoteError::Status {
        status: status.as_u16(),
        message,
    })
}

// ========================
// Calls
// ========================

#[async_trait(?Send)]
impl GroceryRemote for HttpRemote {
    async fn list_items(&self) -> RemoteResult<Vec<Item>> {
        self.send(self.client.get(self.url("items"))).await
    }

    async fn create_item(&self, draft: &ItemDraft) -> RemoteResult<Item> {
        self.send(self.client.post(self.url("items")).json(draft)).await
    }

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> RemoteResult<Item> {
        self.send(self.client.put(self.url(&format!("items/{}", id))).json(draft))
            .await
    }

    async fn delete_item(&self, id: ItemId) -> RemoteResult<()> {
        let _: IgnoredAny = self
            .send(self.client.delete(self.url(&format!("items/{}", id))))
            .await?;
        Ok(())
    }

    async fn toggle_item(&self, id: ItemId) -> RemoteResult<()> {
        let _: IgnoredAny = self
            .send(self.client.patch(self.url(&format!("items/{}/cart", id))))
            .await?;
        Ok(())
    }

    async fn purchase(&self) -> RemoteResult<()> {
        let _: IgnoredAny = self.send(self.client.post(self.url("purchase"))).await?;
        Ok(())
    }

    async fn list_history(&self) -> RemoteResult<Vec<HistoryRecord>> {
        self.send(self.client.get(self.url("history"))).await
    }

    async fn latest_history(&self) -> RemoteResult<Option<HistoryRecord>> {
        self.send(self.client.get(self.url("history/latest"))).await
    }
}
