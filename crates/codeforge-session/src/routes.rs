//! Route table mapping paths to guards.

use codeforge_core::Role;

use crate::guard::{Guard, GuardDecision};
use crate::state::SessionState;

/// A path pattern and the guard protecting it.
///
/// Patterns are `/`-separated; a segment starting with `:` matches any
/// single non-empty segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static str,
    pub guard: Guard,
}

impl Route {
    pub const fn new(pattern: &'static str, guard: Guard) -> Self {
        Self { pattern, guard }
    }

    /// Check whether a concrete path matches this route's pattern.
    pub fn matches(&self, path: &str) -> bool {
        let mut expected = segments(self.pattern);
        let mut actual = segments(path);

        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return true,
                (Some(want), Some(got)) => {
                    if !want.starts_with(':') && want != got {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

/// Split a path into segments, ignoring the query, fragment, and empty segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Ordered set of routes; the first match wins.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route.
    pub fn route(mut self, pattern: &'static str, guard: Guard) -> Self {
        self.routes.push(Route::new(pattern, guard));
        self
    }

    /// The CodeForge web application's pages.
    pub fn codeforge() -> Self {
        let admin = Guard::Role(Role::Admin);

        Self::new()
            .route("/login", Guard::Public)
            .route("/register", Guard::Public)
            .route("/", Guard::Authenticated)
            .route("/dashboard", Guard::Authenticated)
            .route("/problems", Guard::Authenticated)
            .route("/problems/:id", Guard::Authenticated)
            .route("/submissions", Guard::Authenticated)
            .route("/submissions/:id", Guard::Authenticated)
            .route("/behavioral", Guard::Authenticated)
            .route("/behavioral/my-answers", Guard::Authenticated)
            .route("/behavioral/stats", Guard::Authenticated)
            .route("/admin/problems", admin)
            .route("/admin/testcases/:problemId", admin)
            .route("/admin/behavioral", admin)
            // Reachable by any signed-in user; the backend enforces admin rights.
            .route("/admin/problems/:problemId/testcases", Guard::Authenticated)
    }

    /// Find the first route matching `path`.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(path))
    }

    /// Guard decision for `path`, or `None` for an unknown path.
    pub fn decide(&self, path: &str, state: &SessionState) -> Option<GuardDecision> {
        self.resolve(path).map(|route| route.guard.evaluate(state))
    }
}

#[cfg(test)]
mod tests {
    use codeforge_core::UserProfile;

    use super::*;
    use crate::guard::{DEFAULT_LANDING_PATH, LOGIN_PATH};

    fn user() -> SessionState {
        SessionState::Authenticated(UserProfile {
            id: 5,
            username: "dana".into(),
            role: Role::User,
        })
    }

    #[test]
    fn params_match_single_segments() {
        let route = Route::new("/problems/:id", Guard::Authenticated);
        assert!(route.matches("/problems/42"));
        assert!(route.matches("/problems/42/"));
        assert!(route.matches("/problems/42?tab=submit"));
        assert!(!route.matches("/problems"));
        assert!(!route.matches("/problems/42/edit"));
    }

    #[test]
    fn root_matches_only_root() {
        let route = Route::new("/", Guard::Authenticated);
        assert!(route.matches("/"));
        assert!(route.matches(""));
        assert!(!route.matches("/dashboard"));
    }

    #[test]
    fn codeforge_table_guards() {
        let table = RouteTable::codeforge();

        assert_eq!(table.resolve("/login").unwrap().guard, Guard::Public);
        assert_eq!(table.resolve("/dashboard").unwrap().guard, Guard::Authenticated);
        assert_eq!(
            table.resolve("/admin/testcases/3").unwrap().guard,
            Guard::Role(Role::Admin)
        );
        assert_eq!(
            table.resolve("/admin/problems/3/testcases").unwrap().guard,
            Guard::Authenticated
        );
        assert!(table.resolve("/nowhere").is_none());
    }

    #[test]
    fn decide_for_user_and_anonymous() {
        let table = RouteTable::codeforge();

        assert_eq!(
            table.decide("/admin/problems", &user()),
            Some(GuardDecision::Redirect(DEFAULT_LANDING_PATH))
        );
        assert_eq!(
            table.decide("/submissions/7", &user()),
            Some(GuardDecision::Render)
        );
        assert_eq!(
            table.decide("/behavioral/stats", &SessionState::Anonymous),
            Some(GuardDecision::Redirect(LOGIN_PATH))
        );
        assert_eq!(
            table.decide("/register", &SessionState::Anonymous),
            Some(GuardDecision::Render)
        );
        assert_eq!(table.decide("/missing", &user()), None);
    }
}
