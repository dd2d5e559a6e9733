//! Static catalog of known scope identifiers.
//!
//! The catalog is informational. Keys may carry any free-form scope string;
//! nothing validates them against this list. The dashboard uses the catalog
//! to render scope checkboxes on the create form.

use serde::Serialize;

/// One entry of the scope catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scope {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All scopes this service knows about.
pub const SCOPE_CATALOG: [Scope; 8] = [
    Scope {
        id: "read",
        name: "Read",
        description: "Read access to resources",
    },
    Scope {
        id: "write",
        name: "Write",
        description: "Create and update resources",
    },
    Scope {
        id: "delete",
        name: "Delete",
        description: "Delete resources",
    },
    Scope {
        id: "deploy",
        name: "Deploy",
        description: "Deploy services",
    },
    Scope {
        id: "admin",
        name: "Admin",
        description: "Full administrative access",
    },
    Scope {
        id: "webhooks",
        name: "Webhooks",
        description: "Manage webhooks",
    },
    Scope {
        id: "email",
        name: "Email",
        description: "Send emails",
    },
    Scope {
        id: "agents",
        name: "Agents",
        description: "Manage agents",
    },
];
