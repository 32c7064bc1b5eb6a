use serde::Serialize;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::models::notice::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeAction {
    Created,
    Updated,
    Deleted,
}

#[derive(Serialize)]
struct NoticeEvent<'a> {
    action: NoticeAction,
    notice: &'a Notice,
}

/// Fire-and-forget publisher of notice changes to an external sink.
///
/// Delivery failures are logged and dropped; callers never wait on them.
#[derive(Clone)]
pub struct NoticeSync {
    client: reqwest::Client,
    url: Option<String>,
}

impl NoticeSync {
    pub fn new(url: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let Some(url) = url else {
            return Ok(Self::disabled());
        };
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: Some(url),
        })
    }

    pub fn disabled() -> Self {
        Self {
            client: reqwest::Client::new(),
            url: None,
        }
    }

    /// Spawns the delivery task. Returns `None` when no sink is configured.
    pub fn dispatch(&self, action: NoticeAction, notice: &Notice) -> Option<JoinHandle<()>> {
        let url = self.url.clone()?;
        let body = match serde_json::to_value(NoticeEvent { action, notice }) {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to encode notice {} for sync: {}", notice.id, e);
                return None;
            }
        };
        let client = self.client.clone();
        let notice_id = notice.id;

        Some(tokio::spawn(async move {
            match client.post(&url).json(&body).send().await {
                Ok(resp) if resp.status().is_success() => {
                    debug!("Synced notice {} ({:?})", notice_id, action);
                }
                Ok(resp) => {
                    warn!("Notice sync for {} rejected with status {}", notice_id, resp.status());
                }
                Err(e) => {
                    warn!("Notice sync for {} failed: {}", notice_id, e);
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, routing::post, Json, Router};
    use chrono::Utc;
    use serde_json::Value;
    use tokio::sync::mpsc;

    fn sample_notice() -> Notice {
        let now = Utc::now();
        Notice {
            id: 7,
            airport_code: "MNL".to_string(),
            city: "Manila".to_string(),
            message: "NOTAM 1234/2025".to_string(),
            airport_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_disabled_sync_dispatches_nothing() {
        let sync = NoticeSync::disabled();
        assert!(sync.dispatch(NoticeAction::Created, &sample_notice()).is_none());
    }

    #[tokio::test]
    async fn test_dispatch_posts_action_and_notice() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Value>();
        let sink = Router::new()
            .route(
                "/sync",
                post(|State(tx): State<mpsc::UnboundedSender<Value>>, Json(body): Json<Value>| async move {
                    let _ = tx.send(body);
                }),
            )
            .with_state(tx);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, sink).await.unwrap();
        });

        let sync = NoticeSync::new(Some(format!("http://{}/sync", addr)), Duration::from_secs(5)).unwrap();
        sync.dispatch(NoticeAction::Updated, &sample_notice())
            .unwrap()
            .await
            .unwrap();

        let body = rx.recv().await.unwrap();
        assert_eq!(body["action"], "updated");
        assert_eq!(body["notice"]["id"], 7);
        assert_eq!(body["notice"]["airport_code"], "MNL");
    }

    #[tokio::test]
    async fn test_unreachable_sink_is_swallowed() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let sync = NoticeSync::new(Some(format!("http://{}/sync", addr)), Duration::from_secs(2)).unwrap();
        let handle = sync.dispatch(NoticeAction::Deleted, &sample_notice()).unwrap();
        assert!(handle.await.is_ok());
    }
}
