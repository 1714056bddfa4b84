/// Role shown under the user name in the navbar.
pub const USER_ROLE_LABEL: &str = "Alfresco user";

/// Placeholder name when no user is stored.
const ANONYMOUS_NAME: &str = "User";

/// Persisted credentials.
///
/// Both values are absent when logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub ticket: Option<String>,
    pub username: Option<String>,
}

impl Session {
    pub fn new(ticket: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            ticket: Some(ticket.into()),
            username: Some(username.into()),
        }
    }

    /// Ticket, if present and non-empty.
    pub fn ticket(&self) -> Option<&str> {
        self.ticket.as_deref().filter(|t| !t.is_empty())
    }

    /// Signed in means a usable ticket and a username.
    pub fn is_signed_in(&self) -> bool {
        self.ticket().is_some() && self.username.is_some()
    }
}

/// Who is signed in, as shown by the navbar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    username: Option<String>,
    signed_in: bool,
}

impl Identity {
    pub fn from_session(session: &Session) -> Self {
        Self {
            username: session.username.clone().filter(|u| !u.is_empty()),
            signed_in: session.is_signed_in(),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(ANONYMOUS_NAME)
    }

    /// Avatar letter.
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }

    pub fn role(&self) -> &'static str {
        USER_ROLE_LABEL
    }
}
