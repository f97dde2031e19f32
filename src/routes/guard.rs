use tracing::{debug, warn};

use super::Route;
use crate::session::Session;

/// Per-navigation guard state. `Denied` is terminal for that attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unchecked,
    Granted,
    Denied,
}

/// What the shell should do after a navigation has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

/// One attempt to enter a route.
#[derive(Debug, Clone)]
pub struct NavigationAttempt {
    route: Route,
    state: GuardState,
}

impl NavigationAttempt {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            state: GuardState::Unchecked,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Moves an unchecked attempt to `Granted` or `Denied`. Already decided
    /// attempts are returned unchanged.
    pub fn evaluate(mut self, session: &Session) -> Self {
        if self.state != GuardState::Unchecked {
            return self;
        }
        self.state = if !self.route.is_protected() || session.is_authenticated() {
            GuardState::Granted
        } else {
            GuardState::Denied
        };
        self
    }

    /// `None` while the attempt is still unchecked.
    pub fn outcome(&self) -> Option<Navigation> {
        match self.state {
            GuardState::Unchecked => None,
            GuardState::Granted => Some(Navigation::Render(self.route.clone())),
            GuardState::Denied => Some(Navigation::Redirect(Route::Login)),
        }
    }
}

/// Gatekeeper for protected views. Decisions are synchronous, local, and
/// recomputed on every navigation.
#[derive(Clone)]
pub struct RouteGuard {
    session: Session,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn navigate(&self, route: Route) -> Navigation {
        if route == Route::Logout {
            if let Err(e) = self.session.logout() {
                warn!("Logout could not clear the stored credential: {}", e);
            }
            return Navigation::Redirect(Route::Home);
        }

        let attempt = NavigationAttempt::new(route).evaluate(&self.session);
        debug!("Navigation to {} is {:?}", attempt.route(), attempt.state());
        match attempt.outcome() {
            Some(navigation) => navigation,
            // evaluate() always leaves the attempt decided
            None => Navigation::Redirect(Route::Login),
        }
    }

    pub fn navigate_path(&self, path: &str) -> Navigation {
        self.navigate(Route::parse(path))
    }
}
