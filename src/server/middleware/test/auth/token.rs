use super::*;

/// Tests that an issued token decodes back to its user.
///
/// Expected: Ok(user id)
#[test]
fn issued_token_decodes_to_user_id() {
    let auth = auth_config();
    let user = User {
        id: 42,
        username: "somchai".to_string(),
        first_name: "Somchai".to_string(),
        last_name: "Jaidee".to_string(),
        email: None,
        phone: None,
        admin: false,
        room_id: None,
        token_version: 0,
        created_at: chrono::Utc::now(),
    };

    let token = issue_token(&auth, &user).unwrap();

    assert_eq!(decode_token(&auth, &token).unwrap(), 42);
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_token_with_wrong_secret() {
    let user = User {
        id: 1,
        username: "a".to_string(),
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        email: None,
        phone: None,
        admin: true,
        room_id: None,
        token_version: 0,
        created_at: chrono::Utc::now(),
    };
    let other = AuthConfig {
        jwt_secret: "other-secret".to_string(),
        ..auth_config()
    };

    let token = issue_token(&other, &user).unwrap();

    assert!(matches!(
        decode_token(&auth_config(), &token),
        Err(AuthError::InvalidToken(_))
    ));
}

/// Tests that an expired token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_expired_token() {
    let expired = AuthConfig {
        jwt_expiry_hours: -2,
        ..auth_config()
    };
    let user = User {
        id: 7,
        username: "b".to_string(),
        first_name: "B".to_string(),
        last_name: "C".to_string(),
        email: None,
        phone: None,
        admin: false,
        room_id: None,
        token_version: 0,
        created_at: chrono::Utc::now(),
    };

    let token = issue_token(&expired, &user).unwrap();

    assert!(matches!(
        decode_token(&auth_config(), &token),
        Err(AuthError::InvalidToken(_))
    ));
}
