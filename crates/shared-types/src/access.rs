use crate::identity::{Identity, Role};

/// Screens of the dashboard that the router can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Dashboard,
    Companies,
    ClientEmployees,
    ClinicStaff,
    Exams,
    Aso,
    Risks,
    Reports,
}

/// Who may mount a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any authenticated identity.
    Authenticated,
    /// Only identities whose role is listed. An empty list means `Authenticated`.
    Roles(&'static [Role]),
}

/// One row of the static route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub path: &'static str,
    pub view: View,
    pub access: Access,
}

pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/dashboard";

const ADMIN_EMPLOYEE: &[Role] = &[Role::Admin, Role::Employee];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ADMIN_DOCTOR: &[Role] = &[Role::Admin, Role::Doctor];
const ALL_ROLES: &[Role] = &[Role::Admin, Role::Doctor, Role::Employee];

/// Path -> view -> permitted roles. The only place role checks are defined.
pub const ROUTE_TABLE: &[RouteRule] = &[
    RouteRule { path: LOGIN_PATH, view: View::Login, access: Access::Public },
    RouteRule { path: "/", view: View::Dashboard, access: Access::Authenticated },
    RouteRule { path: LANDING_PATH, view: View::Dashboard, access: Access::Authenticated },
    RouteRule { path: "/companies", view: View::Companies, access: Access::Roles(ADMIN_EMPLOYEE) },
    RouteRule { path: "/employees/client", view: View::ClientEmployees, access: Access::Roles(ADMIN_EMPLOYEE) },
    RouteRule { path: "/employees/clinic", view: View::ClinicStaff, access: Access::Roles(ADMIN_ONLY) },
    RouteRule { path: "/exams", view: View::Exams, access: Access::Roles(ADMIN_DOCTOR) },
    RouteRule { path: "/aso", view: View::Aso, access: Access::Roles(ADMIN_DOCTOR) },
    RouteRule { path: "/risks", view: View::Risks, access: Access::Roles(ADMIN_DOCTOR) },
    RouteRule { path: "/reports", view: View::Reports, access: Access::Roles(ALL_ROLES) },
];

impl View {
    /// Canonical path of the view (first matching table row).
    pub fn path(&self) -> &'static str {
        ROUTE_TABLE
            .iter()
            .find(|rule| rule.view == *self)
            .map(|rule| rule.path)
            .unwrap_or(LOGIN_PATH)
    }

    /// Access rule of the view. Views missing from the table require authentication.
    pub fn access(&self) -> Access {
        ROUTE_TABLE
            .iter()
            .find(|rule| rule.view == *self)
            .map(|rule| rule.access)
            .unwrap_or(Access::Authenticated)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Sign In",
            View::Dashboard => "Dashboard",
            View::Companies => "Client Companies",
            View::ClientEmployees => "Client Employees",
            View::ClinicStaff => "Clinic Staff",
            View::Exams => "Medical Exams",
            View::Aso => "ASO Issuance",
            View::Risks => "Occupational Risks",
            View::Reports => "Reports & Statistics",
        }
    }

    /// Whether an identity with `role` may mount this view.
    pub fn permits(&self, role: Role) -> bool {
        matches!(guard(Some(role), self.access()), GuardDecision::Allow)
    }
}

/// Outcome of the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    /// Authenticated but not authorized for the view.
    RedirectToLanding,
}

impl GuardDecision {
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin => Some(LOGIN_PATH),
            GuardDecision::RedirectToLanding => Some(LANDING_PATH),
        }
    }
}

/// Evaluate an access rule for the role of the current identity (if any).
pub fn guard(role: Option<Role>, access: Access) -> GuardDecision {
    match (access, role) {
        (Access::Public, _) => GuardDecision::Allow,
        (_, None) => GuardDecision::RedirectToLogin,
        (Access::Authenticated, Some(_)) => GuardDecision::Allow,
        (Access::Roles(roles), Some(_)) if roles.is_empty() => GuardDecision::Allow,
        (Access::Roles(roles), Some(role)) if roles.contains(&role) => GuardDecision::Allow,
        (Access::Roles(_), Some(_)) => GuardDecision::RedirectToLanding,
    }
}

/// Result of resolving a raw path against the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(View),
    Redirect(&'static str),
}

/// Strip query, fragment and trailing slashes so `/companies/?x=1` matches.
fn normalize(path: &str) -> &str {
    let path = path.split(&['?', '#'][..]).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Look up the table row for a path.
pub fn rule_for(path: &str) -> Option<&'static RouteRule> {
    let path = normalize(path);
    ROUTE_TABLE.iter().find(|rule| rule.path == path)
}

/// Resolve a navigation request. Unmatched paths redirect to the login page.
pub fn navigate(path: &str, identity: Option<&Identity>) -> Navigation {
    let Some(rule) = rule_for(path) else {
        return Navigation::Redirect(LOGIN_PATH);
    };
    match guard(identity.map(|i| i.role), rule.access).redirect_path() {
        None => Navigation::Render(rule.view),
        Some(target) => Navigation::Redirect(target),
    }
}

/// Views a role can reach, in table order, without duplicates. Used for the sidebar.
pub fn views_for(role: Role) -> Vec<View> {
    let mut views = Vec::new();
    for rule in ROUTE_TABLE {
        if rule.view != View::Login && rule.view.permits(role) && !views.contains(&rule.view) {
            views.push(rule.view);
        }
    }
    views
}
