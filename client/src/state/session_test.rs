use super::*;

fn donor() -> User {
    User { email: "donor@example.org".to_owned(), role: Some(Role::Donor) }
}

// =============================================================
// Session defaults
// =============================================================

#[test]
fn session_default_is_loading_without_user() {
    let session = Session::default();
    assert!(session.loading);
    assert!(!session.is_authenticated());
}

#[test]
fn restored_finishes_loading() {
    let empty = Session::restored(None);
    assert!(!empty.loading);
    assert!(!empty.is_authenticated());

    let signed_in = Session::restored(Some(donor()));
    assert!(!signed_in.loading);
    assert!(signed_in.is_authenticated());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn sign_in_then_logout() {
    let mut session = Session::default();
    session.sign_in(donor());
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Donor));

    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
    assert!(!session.loading);
}

#[test]
fn role_is_none_when_user_has_no_role() {
    let session = Session::restored(Some(User { email: "x@y.io".to_owned(), role: None }));
    assert!(session.is_authenticated());
    assert_eq!(session.role(), None);
}
