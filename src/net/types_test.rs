use super::*;

#[test]
fn user_profile_keeps_unknown_server_fields() {
    let raw = serde_json::json!({
        "role": "user",
        "public_id": "abc",
        "first_name": "Alice",
        "last_name": "Smith",
        "display_name": "Alice Smith",
        "email": "a@x.com",
        "last_login_timestamp": 1_700_000_000
    });
    let user: UserProfile = serde_json::from_value(raw.clone()).expect("user");
    assert_eq!(user.display_name, "Alice Smith");
    assert_eq!(user.first_name.as_deref(), Some("Alice"));
    assert_eq!(user.extra.get("role"), Some(&serde_json::json!("user")));

    let back = serde_json::to_value(&user).expect("serialize");
    assert_eq!(back, raw);
}

#[test]
fn user_profile_requires_display_name_and_email() {
    let missing_email = serde_json::json!({ "display_name": "Alice" });
    assert!(serde_json::from_value::<UserProfile>(missing_email).is_err());
}

#[test]
fn session_envelope_treats_null_user_as_anonymous() {
    let envelope: SessionEnvelope = serde_json::from_value(serde_json::json!({ "user": null })).expect("envelope");
    assert_eq!(envelope, SessionEnvelope::default());
}

#[test]
fn session_envelope_reads_logout_url_and_token() {
    let envelope: SessionEnvelope = serde_json::from_value(serde_json::json!({
        "success": true,
        "user": { "display_name": "Alice", "email": "a@x.com" },
        "logout_url": "/api/users/logout/",
        "token": "tok123"
    }))
    .expect("envelope");
    assert_eq!(envelope.user.map(|u| u.display_name).as_deref(), Some("Alice"));
    assert_eq!(envelope.logout_url.as_deref(), Some("/api/users/logout/"));
    assert_eq!(envelope.token.as_deref(), Some("tok123"));
}

#[test]
fn register_form_serializes_server_field_names() {
    let form = RegisterForm {
        email: "a@x.com".to_owned(),
        password1: "pw".to_owned(),
        password2: "pw".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Smith".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&form).expect("serialize"),
        serde_json::json!({
            "email": "a@x.com",
            "password1": "pw",
            "password2": "pw",
            "first_name": "Alice",
            "last_name": "Smith"
        })
    );
}
