//! URL construction for the repository REST API.

use urlencoding::encode;

/// Query parameter carrying the session ticket.
const TICKET_PARAM: &str = "alf_ticket";

#[derive(Clone, Debug)]
pub(crate) struct Endpoints {
    api_base: String,
}

impl Endpoints {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Ticket collection (login).
    pub fn tickets(&self) -> String {
        format!("{}/authentication/versions/1/tickets", self.api_base)
    }

    /// The caller's own ticket (logout).
    pub fn current_ticket(&self, ticket: &str) -> String {
        with_ticket(format!("{}/-me-", self.tickets()), ticket)
    }

    pub fn node(&self, node_id: &str, ticket: &str) -> String {
        with_ticket(self.node_path(node_id), ticket)
    }

    pub fn children(&self, node_id: &str, ticket: &str) -> String {
        with_ticket(format!("{}/children", self.node_path(node_id)), ticket)
    }

    pub fn content(&self, node_id: &str, ticket: &str) -> String {
        with_ticket(format!("{}/content", self.node_path(node_id)), ticket)
    }

    fn node_path(&self, node_id: &str) -> String {
        format!(
            "{}/alfresco/versions/1/nodes/{}",
            self.api_base,
            encode(node_id)
        )
    }
}

fn with_ticket(url: String, ticket: &str) -> String {
    format!("{url}?{TICKET_PARAM}={}", encode(ticket))
}
