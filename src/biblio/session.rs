use crate::model::User;

/// The zero-or-one logged-in identity for the lifetime of one interpreter.
///
/// Owned by the interpreter and passed to command handlers by reference,
/// never through a process-wide global, so tests can drive several sessions side by
/// side.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, user: User) {
        self.current = Some(user);
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.is_admin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert!(!session.is_admin());
    }

    #[test]
    fn login_then_logout_round_trip() {
        let mut session = Session::new();
        session.login(User::new("Alice"));
        assert!(session.is_logged_in());
        assert!(!session.is_admin());
        session.logout();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn admin_capability_follows_the_user() {
        let mut session = Session::new();
        session.login(User::new("admin"));
        assert!(session.is_admin());
    }
}
