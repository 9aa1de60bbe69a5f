use shared_types::{AppError, ChangePasswordRequest, UpdateProfileRequest, UserProfile};

pub const PROFILE_LOAD_ERROR: &str = "Error loading profile";
pub const PASSWORD_CHANGE_ERROR: &str = "Error changing password";
pub const PASSWORD_CHANGED: &str = "Password changed successfully";
pub const PROFILE_UPDATE_ERROR: &str = "Error updating profile";
pub const PROFILE_UPDATED: &str = "Profile updated";

/// The two fields of the dashboard's password-change form.
///
/// No strength or confirmation checks happen here; the backend decides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
}

impl PasswordChangeForm {
    pub fn request(&self) -> ChangePasswordRequest {
        ChangePasswordRequest::new(self.current_password.clone(), self.new_password.clone())
    }

    /// Apply the outcome of a submission. Success clears both fields; failure
    /// leaves them as typed and returns the banner text.
    pub fn finish(&mut self, result: Result<(), AppError>) -> Result<&'static str, &'static str> {
        match result {
            Ok(()) => {
                self.current_password.clear();
                self.new_password.clear();
                Ok(PASSWORD_CHANGED)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Password change failed");
                Err(PASSWORD_CHANGE_ERROR)
            }
        }
    }
}

/// Editable copy of the profile's name and email.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileEditForm {
    pub full_name: String,
    pub email: String,
}

impl ProfileEditForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
        }
    }

    /// Request carrying only the fields that are non-empty and differ from
    /// `current`. `None` when nothing changed.
    pub fn changes_from(&self, current: &UserProfile) -> Option<UpdateProfileRequest> {
        let changed = |edited: &str, original: &str| {
            let edited = edited.trim();
            (!edited.is_empty() && edited != original).then(|| edited.to_string())
        };
        let request = UpdateProfileRequest {
            full_name: changed(&self.full_name, &current.full_name),
            email: changed(&self.email, &current.email),
        };
        (!request.is_empty()).then_some(request)
    }
}
