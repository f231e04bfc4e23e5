//! Remote key-document storage over HTTP.
//!
//! One document per editor, keyed by a fixed identifier under a base URL.
//! The body nests the snapshot under `data`:
//! `{"data":{"nodes":[...],"edges":[...]}}`. Reads are GET (404 means
//! nothing stored yet), writes are full-document PUT — last write wins.

use crate::backend::{PersistError, PersistenceBackend};
use dg_core::GraphSnapshot;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct Document {
    data: GraphSnapshot,
}

#[derive(Debug, Serialize)]
struct DocumentRef<'a> {
    data: &'a GraphSnapshot,
}

/// Remote document-store persistence.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    client: reqwest::Client,
    url: String,
}

impl RemoteBackend {
    pub fn new(base_url: &str, key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/{key}", base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PersistenceBackend for RemoteBackend {
    async fn load(&self) -> Result<Option<GraphSnapshot>, PersistError> {
        let response = self.client.get(&self.url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let document: Document = serde_json::from_str(&body)?;
        Ok(Some(document.data))
    }

    async fn save(&self, snapshot: &GraphSnapshot) -> Result<(), PersistError> {
        self.client
            .put(&self.url)
            .json(&DocumentRef { data: snapshot })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_core::{Edge, Node, NodeId, Point};
    use pretty_assertions::assert_eq;

    #[test]
    fn document_body_nests_snapshot_under_data() {
        let snapshot = GraphSnapshot {
            nodes: vec![Node::at(NodeId::from("2"), Point::new(100.0, 50.0))],
            edges: vec![Edge::to_new_node(NodeId::root(), NodeId::from("2"))],
        };
        let body = serde_json::to_value(DocumentRef { data: &snapshot }).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "data": {
                    "nodes": [
                        {"id": "2", "position": {"x": 100.0, "y": 50.0}, "label": "Node 2"}
                    ],
                    "edges": [
                        {"id": "2", "source": "1", "target": "2"}
                    ]
                }
            })
        );
    }

    #[test]
    fn document_body_parses_back() {
        let body = r#"{"data":{"nodes":[{"id":"1","position":{"x":0.0,"y":50.0},"label":"Node"}],"edges":[]}}"#;
        let document: Document = serde_json::from_str(body).unwrap();
        assert_eq!(document.data, GraphSnapshot::default_graph());
    }

    #[test]
    fn url_joins_base_and_key() {
        let backend = RemoteBackend::new("https://store.example/docs/", "graph-1");
        assert_eq!(backend.url(), "https://store.example/docs/graph-1");
    }
}
