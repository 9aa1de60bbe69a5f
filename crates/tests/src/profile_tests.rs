use client::forms::{PASSWORD_CHANGED, PASSWORD_CHANGE_ERROR};
use client::{PasswordChangeForm, ProfileEditForm};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest};

use crate::common::{self, StubBackend};

#[tokio::test]
async fn test_current_user_returns_profile() {
    let backend = StubBackend::start().await;
    let api = backend.client();
    let token = backend.token_for(common::USER_EMAIL);

    let profile = api.current_user(&token).await.unwrap();
    assert_eq!(profile.email, common::USER_EMAIL);
    assert_eq!(profile.full_name, "Regular User");
    assert!(!profile.is_admin());
}

#[tokio::test]
async fn test_current_user_with_bad_token_is_unauthorized() {
    let backend = StubBackend::start().await;
    let api = backend.client();

    let err = api.current_user("token-999").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_password_change_success_clears_form() {
    let backend = StubBackend::start().await;
    let api = backend.client();
    let token = backend.token_for(common::USER_EMAIL);

    let mut form = PasswordChangeForm {
        current_password: common::USER_PASSWORD.into(),
        new_password: "rotated-secret".into(),
    };
    let result = api.change_password(&token, &form.request()).await;
    assert_eq!(form.finish(result), Ok(PASSWORD_CHANGED));
    assert_eq!(form, PasswordChangeForm::default());

    // The new password is the one that works now.
    let old = LoginRequest {
        email: common::USER_EMAIL.into(),
        password: common::USER_PASSWORD.into(),
    };
    assert!(api.login(&old).await.is_err());
    let new = LoginRequest {
        email: common::USER_EMAIL.into(),
        password: "rotated-secret".into(),
    };
    assert!(api.login(&new).await.is_ok());
}

#[tokio::test]
async fn test_password_change_with_wrong_current_password() {
    let backend = StubBackend::start().await;
    let api = backend.client();
    let token = backend.token_for(common::USER_EMAIL);

    let mut form = PasswordChangeForm {
        current_password: "not-it".into(),
        new_password: "rotated-secret".into(),
    };
    let result = api.change_password(&token, &form.request()).await;
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);

    assert_eq!(form.finish(result), Err(PASSWORD_CHANGE_ERROR));
    assert_eq!(form.current_password, "not-it");
    assert_eq!(
        backend.user(common::USER_EMAIL).unwrap().password,
        common::USER_PASSWORD
    );
}

#[tokio::test]
async fn test_profile_edit_sends_only_changes() {
    let backend = StubBackend::start().await;
    let api = backend.client();
    let token = backend.token_for(common::USER_EMAIL);

    let profile = api.current_user(&token).await.unwrap();
    let mut form = ProfileEditForm::from_profile(&profile);
    form.full_name = "Renamed User".into();

    let request = form.changes_from(&profile).unwrap();
    assert_eq!(request.email, None);
    let updated = api.update_profile(&token, &request).await.unwrap();
    assert_eq!(updated.full_name, "Renamed User");
    assert_eq!(updated.email, common::USER_EMAIL);

    let reloaded = api.current_user(&token).await.unwrap();
    assert_eq!(reloaded.full_name, "Renamed User");
}
