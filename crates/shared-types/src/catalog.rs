use serde::{Deserialize, Serialize};
use std::fmt;

/// A staffing requisition open under a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requisition {
    pub req_id: String,
    pub job_title: String,
    #[serde(default)]
    pub talents: Vec<String>,
}

/// A client and the requisitions it has open, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRequisitions {
    pub name: String,
    #[serde(default)]
    pub requisitions: Vec<Requisition>,
}

/// Read-only source of clients and their requisitions.
///
/// The form only ever reads from it; a catalog service client can stand in
/// for [`StaticCatalog`] by implementing this trait.
pub trait RequisitionCatalog: fmt::Debug + Send + Sync {
    /// Client names in display order.
    fn clients(&self) -> Vec<String>;

    /// Requisitions for `client`; empty for unknown clients.
    fn requisitions(&self, client: &str) -> Vec<Requisition>;

    /// The requisition under `client` whose job title is `job_title`.
    fn find(&self, client: &str, job_title: &str) -> Option<Requisition> {
        self.requisitions(client)
            .into_iter()
            .find(|r| r.job_title == job_title)
    }
}

/// In-memory catalog, usually loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    clients: Vec<ClientRequisitions>,
}

impl StaticCatalog {
    pub fn new(clients: Vec<ClientRequisitions>) -> Self {
        Self { clients }
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl RequisitionCatalog for StaticCatalog {
    fn clients(&self) -> Vec<String> {
        self.clients.iter().map(|c| c.name.clone()).collect()
    }

    fn requisitions(&self, client: &str) -> Vec<Requisition> {
        self.clients
            .iter()
            .find(|c| c.name == client)
            .map(|c| c.requisitions.clone())
            .unwrap_or_default()
    }
}
