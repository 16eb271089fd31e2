use super::model::{UserPreferences, UserProfile};
use crate::catalog::model::{Category, EventType, Region};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Who is browsing, and what they like.
pub trait PreferenceStore {
    fn current_user(&self) -> Option<&UserProfile>;

    /// Adds or removes an event from the saved set. No-op without a user.
    fn toggle_saved(&mut self, event_id: u32);

    fn preferences(&self) -> Option<&UserPreferences> {
        self.current_user().map(|user| &user.preferences)
    }

    fn is_saved(&self, event_id: u32) -> bool {
        self.current_user()
            .is_some_and(|user| user.is_saved(event_id))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("an email address is required")]
    MissingEmail,

    #[error("passwords do not match")]
    PasswordMismatch,
}

/// A signup waiting for its onboarding preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSignup {
    email: String,
}

/// Login without credentials. Nothing is verified and nothing outlives the process.
#[derive(Debug, Default)]
pub struct SimulatedSession {
    user: Option<UserProfile>,
}

impl SimulatedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any email gets in, with a canned profile
    #[instrument(skip(self))]
    pub fn login(&mut self, email: &str) -> Result<&UserProfile, AuthError> {
        let email = validate_email(email)?;

        let preferences = UserPreferences::new(
            [Category::Music, Category::Cultural],
            [Region::Ontario, Region::Ottawa],
            [EventType::Festival, EventType::Activity],
        );

        info!("Logged in with {}", preferences);

        Ok(&*self
            .user
            .insert(UserProfile::new(email, preferences, BTreeSet::from([1, 3, 5]))))
    }

    #[instrument(skip(self, password, confirm_password))]
    pub fn sign_up(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<PendingSignup, AuthError> {
        let email = validate_email(email)?;

        if password != confirm_password {
            warn!("Passwords do not match");
            return Err(AuthError::PasswordMismatch);
        }

        Ok(PendingSignup {
            email: email.to_string(),
        })
    }

    #[instrument(skip(self, pending), fields(email = %pending.email))]
    pub fn complete_onboarding(
        &mut self,
        pending: PendingSignup,
        preferences: UserPreferences,
    ) -> &UserProfile {
        info!("Onboarded with {}", preferences);

        &*self
            .user
            .insert(UserProfile::new(&pending.email, preferences, BTreeSet::new()))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.email);
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

impl PreferenceStore for SimulatedSession {
    fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    fn toggle_saved(&mut self, event_id: u32) {
        match self.user.as_mut() {
            Some(user) => {
                let saved = user.toggle_saved(event_id);
                info!(event_id, saved, "Toggled saved event");
            }
            None => warn!(event_id, "Can't save an event without a user"),
        }
    }
}

fn validate_email(email: &str) -> Result<&str, AuthError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(AuthError::MissingEmail);
    }

    Ok(email)
}
