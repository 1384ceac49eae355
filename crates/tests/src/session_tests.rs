use clinic_api::auth::{FileStore, SessionStore, DEMO_PASSWORD};
use clinic_api::{Directory, Session};
use pretty_assertions::assert_eq;
use shared_types::{Navigation, Role, View, LANDING_PATH, LOGIN_PATH};

/// Session persisted to disk survives a "reload" (a fresh `Session` over
/// the same directory) with identical access.
#[test]
fn test_file_backed_session_survives_reload() {
    let dir = std::env::temp_dir().join(format!("clinic-session-{}", uuid::Uuid::new_v4()));

    let mut session = Session::restore(Directory::demo(), FileStore::new(&dir));
    assert!(session.login("doctor@clinic.com", DEMO_PASSWORD));

    let reloaded = Session::restore(Directory::demo(), FileStore::new(&dir));
    assert_eq!(reloaded.role(), Some(Role::Doctor));
    assert_eq!(reloaded.navigate("/exams"), Navigation::Render(View::Exams));
    assert_eq!(reloaded.navigate("/companies"), Navigation::Redirect(LANDING_PATH));

    session.logout();
    let after_logout = Session::restore(Directory::demo(), FileStore::new(&dir));
    assert!(!after_logout.is_authenticated());
    assert_eq!(after_logout.navigate("/reports"), Navigation::Redirect(LOGIN_PATH));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupted_file_store_starts_signed_out() {
    let dir = std::env::temp_dir().join(format!("clinic-session-{}", uuid::Uuid::new_v4()));
    let store = FileStore::new(&dir);
    store.save("{ definitely not an identity").unwrap();

    let session = Session::restore(Directory::demo(), store);
    assert!(!session.is_authenticated());

    let _ = std::fs::remove_dir_all(&dir);
}
