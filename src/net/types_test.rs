use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn credentials_serialize_to_flat_body() {
    let body = Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "x"}));
}

#[test]
fn signup_request_nests_user() {
    let body = SignupRequest {
        user: SignupUser {
            fname: "Ada".to_owned(),
            lname: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "Abcdef1!".to_owned(),
        },
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["user"]["fname"], "Ada");
    assert_eq!(json["user"]["password"], "Abcdef1!");
}

// =============================================================
// Success envelopes
// =============================================================

#[test]
fn signin_response_decodes_full_payload() {
    let json = r#"{
        "data": {
            "email": "ada@example.com",
            "fname": "Ada",
            "lname": "Lovelace",
            "meta": {"token": "T"}
        }
    }"#;
    let resp: SigninResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.data.email.as_deref(), Some("ada@example.com"));
    assert_eq!(resp.data.fname.as_deref(), Some("Ada"));
    assert_eq!(resp.data.meta.token, "T");
}

#[test]
fn signin_response_tolerates_null_identity_fields() {
    let json = r#"{"data": {"email": null, "fname": null, "lname": null, "meta": {"token": "T"}}}"#;
    let resp: SigninResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.data.email, None);
    assert_eq!(resp.data.fname, None);
    assert_eq!(resp.data.lname, None);
    assert_eq!(resp.data.meta.token, "T");
}

#[test]
fn signin_response_requires_token() {
    let json = r#"{"data": {"email": "a@b.com", "fname": null, "lname": null, "meta": {}}}"#;
    assert!(serde_json::from_str::<SigninResponse>(json).is_err());
}

#[test]
fn signup_response_decodes_message() {
    let json = r#"{"data": {"success": true, "message": "Account created. Please sign in."}}"#;
    let resp: SignupResponse = serde_json::from_str(json).unwrap();
    assert!(resp.data.success);
    assert_eq!(resp.data.message, "Account created. Please sign in.");
}

#[test]
fn signup_response_defaults_missing_success() {
    let json = r#"{"data": {"message": "ok"}}"#;
    let resp: SignupResponse = serde_json::from_str(json).unwrap();
    assert!(!resp.data.success);
}

// =============================================================
// Error envelope discrimination
// =============================================================

#[test]
fn error_body_decodes_string_shape() {
    let json = r#"{"error": "Invalid email or password.", "success": false}"#;
    let body: ErrorBody = serde_json::from_str(json).unwrap();
    assert_eq!(body.error, ErrorPayload::Message("Invalid email or password.".to_owned()));
}

#[test]
fn error_body_decodes_field_array_shape() {
    let json = r#"{
        "error": [{
            "fname": null,
            "lname": null,
            "email": "has already been taken",
            "password": "is too short"
        }],
        "success": false
    }"#;
    let body: ErrorBody = serde_json::from_str(json).unwrap();
    let ErrorPayload::Fields(sets) = body.error else {
        panic!("expected field-error shape");
    };
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].email.as_deref(), Some("has already been taken"));
    assert_eq!(sets[0].password.as_deref(), Some("is too short"));
    assert_eq!(sets[0].fname, None);
}

#[test]
fn field_error_set_tolerates_missing_fields() {
    let json = r#"{"error": [{"email": "Invalid email"}]}"#;
    let body: ErrorBody = serde_json::from_str(json).unwrap();
    let ErrorPayload::Fields(sets) = body.error else {
        panic!("expected field-error shape");
    };
    assert_eq!(sets[0].email.as_deref(), Some("Invalid email"));
    assert_eq!(sets[0].lname, None);
    assert_eq!(sets[0].password, None);
}

#[test]
fn error_body_rejects_absent_error_key() {
    assert!(serde_json::from_str::<ErrorBody>(r#"{"success": false}"#).is_err());
}
