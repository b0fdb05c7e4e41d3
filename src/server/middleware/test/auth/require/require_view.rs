use super::*;

/// Tests that both roles grant read access.
///
/// Expected: Ok(Claims) for Admin and for User
#[test]
fn passes_for_admin_and_user() {
    let tokens = token_service();

    for role in [Role::Admin, Role::User] {
        let headers = headers_with_roles(&tokens, &[role]);

        let result = AuthGuard::new(&tokens, &headers).require(&[Permission::View]);

        assert!(result.is_ok(), "{} should be able to view", role);
    }
}

/// Tests that a token without roles is denied read access.
///
/// Expected: Err(AuthError::AccessDenied)
#[test]
fn denies_token_without_roles() {
    let tokens = token_service();
    let headers = headers_with_roles(&tokens, &[]);

    let result = AuthGuard::new(&tokens, &headers).require(&[Permission::View]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));
}

/// Tests that every listed permission must be satisfied.
///
/// Expected: Err(AuthError::AccessDenied) for a User asking for View and Admin
#[test]
fn requires_all_permissions() {
    let tokens = token_service();
    let headers = headers_with_roles(&tokens, &[Role::User]);

    let result =
        AuthGuard::new(&tokens, &headers).require(&[Permission::View, Permission::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));
}
