//! Route guarding
//!
//! Gates navigation into protected views from the current session state.
//! A denied navigation resolves to the matching login view rather than an
//! error.

use std::sync::Arc;
use tracing::debug;
use crate::services::AdminGate;
use crate::session::SessionStore;

/// Access requirement a view declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Public,
    UserOnly,
    AdminOnly,
}

/// Login views a denied navigation redirects to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginView {
    UserLogin,
    AdminLogin,
}

/// Outcome of a guarded navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectTo(LoginView),
}

/// Navigation guard over the two independent session domains
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Arc<SessionStore>,
    admin: Arc<AdminGate>,
}

impl RouteGuard {
    /// Create a new RouteGuard instance
    pub fn new(session: Arc<SessionStore>, admin: Arc<AdminGate>) -> Self {
        Self { session, admin }
    }

    /// Whether the current actor may enter routes of the given kind
    pub fn can_enter(&self, kind: RouteKind) -> bool {
        match kind {
            RouteKind::Public => true,
            RouteKind::UserOnly => self.session.is_authenticated(),
            RouteKind::AdminOnly => self.admin.is_admin(),
        }
    }

    /// Resolve a navigation attempt to an allow or a login redirect
    pub fn check(&self, kind: RouteKind) -> RouteDecision {
        if self.can_enter(kind) {
            return RouteDecision::Allow;
        }

        let decision = match kind {
            RouteKind::UserOnly => RouteDecision::RedirectTo(LoginView::UserLogin),
            RouteKind::AdminOnly => RouteDecision::RedirectTo(LoginView::AdminLogin),
            // can_enter is always true for public routes
            RouteKind::Public => RouteDecision::Allow,
        };
        debug!(kind = ?kind, decision = ?decision, "Navigation denied");

        decision
    }
}
