/// Name of the cookie carrying the session token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Answers "is there a plausible session cookie?" from a raw `Cookie` header
/// string. Presence detection only: the value is never verified, so this must
/// not gate anything beyond which page branch to render.
#[must_use]
pub fn has_access_token(cookie_header: &str) -> bool {
    cookie_header
        .split("; ")
        .filter_map(|entry| entry.strip_prefix(ACCESS_TOKEN_COOKIE))
        .filter_map(|rest| rest.strip_prefix('='))
        .next()
        .is_some_and(|value| !value.trim().is_empty())
}

/// What token issuance hands back to a successfully authenticated caller.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) token: String,
    pub(crate) email: String,
    pub(crate) expires_at: i64,
}

/// Landing page session state. Resolves out of `Unknown` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    #[must_use]
    pub const fn resolve(self, present: bool) -> Self {
        match self {
            Self::Unknown => {
                if present {
                    Self::Authenticated
                } else {
                    Self::Unauthenticated
                }
            }
            resolved => resolved,
        }
    }
}
