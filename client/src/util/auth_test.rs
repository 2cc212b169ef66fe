use super::*;

fn user(role: Option<Role>) -> User {
    User { email: "someone@example.org".to_owned(), role }
}

#[test]
fn guard_redirects_when_restored_without_user() {
    let session = Session::restored(None);
    assert_eq!(guard_decision(&session), GuardDecision::Redirect("/login"));
}

#[test]
fn guard_waits_while_loading() {
    assert_eq!(guard_decision(&Session::default()), GuardDecision::Pending);
}

#[test]
fn guard_renders_for_authenticated_user() {
    let session = Session::restored(Some(user(Some(Role::Donor))));
    assert_eq!(guard_decision(&session), GuardDecision::Render);
}

#[test]
fn guard_ignores_role() {
    for role in [None, Some(Role::Admin), Some(Role::Organization), Some(Role::Donor)] {
        let session = Session::restored(Some(user(role)));
        assert_eq!(guard_decision(&session), GuardDecision::Render, "role {role:?}");
    }
}

#[test]
fn guard_redirects_after_logout() {
    let mut session = Session::restored(Some(user(Some(Role::Donor))));
    session.logout();
    assert_eq!(guard_decision(&session), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn landing_path_sends_donors_to_donate() {
    assert_eq!(landing_path(&user(Some(Role::Donor))), "/donate");
    assert_eq!(landing_path(&user(Some(Role::Admin))), "/impact");
    assert_eq!(landing_path(&user(Some(Role::Organization))), "/impact");
    assert_eq!(landing_path(&user(None)), "/impact");
}
