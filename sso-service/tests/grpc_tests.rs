mod common;

use auth::JwtHandler;
use common::TestApp;
use common::APP_ID;
use common::APP_SECRET;
use sso_service::proto::auth_server::Auth;
use sso_service::proto::IsAdminRequest;
use sso_service::proto::LoginRequest;
use sso_service::proto::RegisterRequest;
use tonic::Code;
use tonic::Request;

fn register_request(email: &str, password: &str) -> Request<RegisterRequest> {
    Request::new(RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn login_request(email: &str, password: &str, app_id: i32) -> Request<LoginRequest> {
    Request::new(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        app_id,
    })
}

#[tokio::test]
async fn test_register_login_is_admin() {
    let app = TestApp::new();
    let grpc = app.grpc();

    let user_id = grpc
        .register(register_request("user@example.com", "Passw0rd!"))
        .await
        .expect("Register failed")
        .into_inner()
        .user_id;
    assert!(user_id > 0);

    let token = grpc
        .login(login_request("user@example.com", "Passw0rd!", APP_ID))
        .await
        .expect("Login failed")
        .into_inner()
        .token;

    let claims = JwtHandler::new(APP_SECRET.as_bytes())
        .decode(&token)
        .expect("Token validation failed");
    assert_eq!(claims.uid, user_id);
    assert_eq!(claims.email, "user@example.com");

    let is_admin = grpc
        .is_admin(Request::new(IsAdminRequest { user_id }))
        .await
        .expect("IsAdmin failed")
        .into_inner()
        .is_admin;
    assert!(!is_admin);
}

#[tokio::test]
async fn test_missing_fields_are_invalid_arguments() {
    let app = TestApp::new();
    let grpc = app.grpc();

    let status = grpc
        .register(register_request("", "Passw0rd!"))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "email is required");

    let status = grpc
        .login(login_request("user@example.com", "", APP_ID))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "password is required");

    let status = grpc
        .login(login_request("user@example.com", "Passw0rd!", 0))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "app_id is required");

    let status = grpc
        .is_admin(Request::new(IsAdminRequest { user_id: 0 }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "user_id is required");

    assert_eq!(app.storage.user_count(), 0);
}

#[tokio::test]
async fn test_domain_errors_map_to_status_codes() {
    let app = TestApp::new();
    let grpc = app.grpc();

    grpc.register(register_request("user@example.com", "Passw0rd!"))
        .await
        .expect("Register failed");

    let duplicate = grpc
        .register(register_request("user@example.com", "Passw0rd!"))
        .await
        .unwrap_err();
    assert_eq!(duplicate.code(), Code::AlreadyExists);

    let unknown_email = grpc
        .login(login_request("nobody@example.com", "Passw0rd!", APP_ID))
        .await
        .unwrap_err();
    let wrong_password = grpc
        .login(login_request("user@example.com", "wrong", APP_ID))
        .await
        .unwrap_err();
    assert_eq!(unknown_email.code(), Code::InvalidArgument);
    assert_eq!(unknown_email.code(), wrong_password.code());
    assert_eq!(unknown_email.message(), wrong_password.message());

    let unknown_app = grpc
        .login(login_request("user@example.com", "Passw0rd!", 42))
        .await
        .unwrap_err();
    assert_eq!(unknown_app.code(), Code::InvalidArgument);
    assert_eq!(unknown_app.message(), "invalid app id");

    let unknown_user = grpc
        .is_admin(Request::new(IsAdminRequest { user_id: 9999 }))
        .await
        .unwrap_err();
    assert_eq!(unknown_user.code(), Code::NotFound);
}
