use serde_json::json;

use super::*;

// ==================== SignInRequest Tests ====================

#[test]
fn test_sign_in_request_wire_shape() {
    let request = SignInRequest::new("a@b.com", "secret");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "email": "a@b.com",
            "password": "secret",
            "returnSecureToken": true
        })
    );
}

#[test]
fn test_password_reset_request_wire_shape() {
    let request = PasswordResetRequest::new("a@b.com");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "requestType": "PASSWORD_RESET",
            "email": "a@b.com"
        })
    );
}

// ==================== IdentityResponse Tests ====================

#[test]
fn test_identity_response_full_body() {
    let body = json!({
        "kind": "identitytoolkit#SignupNewUserResponse",
        "localId": "user-123",
        "email": "a@b.com",
        "displayName": "",
        "idToken": "token-abc",
        "registered": true,
        "refreshToken": "refresh-xyz",
        "expiresIn": "3600"
    })
    .to_string();

    let response: IdentityResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response.local_id, "user-123");
    assert_eq!(response.email, "a@b.com");
    assert_eq!(response.id_token.as_deref(), Some("token-abc"));
    assert_eq!(response.registered, Some(true));
    assert_eq!(response.expires_in.as_deref(), Some("3600"));
}

#[test]
fn test_identity_response_minimal_body() {
    // Optional fields may be absent entirely
    let body = json!({
        "localId": "user-123",
        "email": "a@b.com"
    })
    .to_string();

    let response: IdentityResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response.local_id, "user-123");
    assert!(response.id_token.is_none());
    assert!(response.refresh_token.is_none());
}

// ==================== IdentityErrorResponse Tests ====================

#[test]
fn test_error_message_extraction() {
    let body = json!({
        "error": {
            "code": 400,
            "message": "INVALID_PASSWORD",
            "errors": [{"message": "INVALID_PASSWORD", "domain": "global"}]
        }
    })
    .to_string();

    assert_eq!(
        IdentityErrorResponse::message_from_body(&body),
        "INVALID_PASSWORD"
    );
}

#[test]
fn test_error_message_fallback_on_malformed_body() {
    assert_eq!(
        IdentityErrorResponse::message_from_body("<html>bad gateway</html>"),
        "Unknown error"
    );
    assert_eq!(IdentityErrorResponse::message_from_body("{}"), "Unknown error");
}

// ==================== AppUser Tests ====================

#[test]
fn test_app_user_round_trip() {
    let user = AppUser {
        uid: "user-123".to_string(),
        email: "a@b.com".to_string(),
        registration_date: None,
        last_login_date: Some(chrono::Utc::now()),
        account_status: AccountStatus::Active,
    };

    let encoded = serde_json::to_string(&user).unwrap();
    let decoded: AppUser = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, user);
}
