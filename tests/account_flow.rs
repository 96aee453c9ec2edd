// tests/account_flow.rs
use finboard_core::application::{
    ApplicationError,
    commands::users::{LoginUserCommand, RegisterUserCommand, UpdateProfileCommand},
    ports::{identity::Session, views::RouteScope},
};

mod support;
use support::*;

fn registration() -> RegisterUserCommand {
    RegisterUserCommand {
        email: "Owner@Example.com".into(),
        password: "correct horse".into(),
        full_name: "Dana Owner".into(),
    }
}

#[tokio::test]
async fn register_login_and_rename() {
    let app = TestApp::new();
    let users = &app.services.user_commands;

    let profile = users.register(registration()).await.expect("register");
    assert_eq!(profile.email, "owner@example.com");

    let login = users
        .login(LoginUserCommand {
            email: "owner@example.com".into(),
            password: "correct horse".into(),
        })
        .await
        .expect("login");
    assert!(login.token.session_id.is_some());

    let session = app
        .services
        .session_for(Some(login.token.token.as_str()))
        .await;
    assert!(session.is_authenticated());

    let me = app.services.user_queries.me(&session).await.unwrap();
    assert_eq!(me.full_name, "Dana Owner");

    let renamed = users
        .update_profile(
            &session,
            UpdateProfileCommand {
                full_name: "Dana O.".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.full_name, "Dana O.");
    assert_eq!(app.views.scopes(), vec![RouteScope::Account]);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = TestApp::new();
    let users = &app.services.user_commands;
    users.register(registration()).await.unwrap();

    let err = users.register(registration()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn registration_reports_all_bad_fields() {
    let app = TestApp::new();
    let err = app
        .services
        .user_commands
        .register(RegisterUserCommand {
            email: "nope".into(),
            password: "short".into(),
            full_name: "A".into(),
        })
        .await
        .unwrap_err();

    match err {
        ApplicationError::ValidationFailed(fields) => {
            assert!(fields.contains("email"));
            assert!(fields.contains("password"));
            assert!(fields.contains("full_name"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn wrong_password_is_unauthenticated() {
    let app = TestApp::new();
    let users = &app.services.user_commands;
    users.register(registration()).await.unwrap();

    let err = users
        .login(LoginUserCommand {
            email: "owner@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthenticated));
}

#[tokio::test]
async fn bad_token_yields_an_anonymous_session() {
    let app = TestApp::new();
    let session: Session = app.services.session_for(Some("garbage")).await;
    assert!(!session.is_authenticated());
    let none = app.services.session_for(None).await;
    assert!(!none.is_authenticated());
}
