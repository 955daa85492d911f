//! Auth Port - the access token capability
//!
//! Every network-calling component reads the bearer token through this port;
//! only the sign-in screen and the logout action write it.

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AuthPort: Send + Sync {
    /// Current access token, `None` when signed out
    fn get_token(&self) -> Option<String>;

    fn sign_in(&self, token: &str);

    fn logout(&self);

    fn is_signed_in(&self) -> bool {
        self.get_token().is_some()
    }
}
