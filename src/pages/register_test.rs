use super::*;

#[test]
fn build_register_request_trims_text_fields() {
    let request = build_register_request(" Ada ", "Lovelace ", " ada@example.com", "pw").unwrap();
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.last_name, "Lovelace");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, "pw");
}

#[test]
fn build_register_request_requires_every_field() {
    assert_eq!(build_register_request("", "L", "e@x.com", "pw"), Err("All fields are required."));
    assert_eq!(build_register_request("F", "  ", "e@x.com", "pw"), Err("All fields are required."));
    assert_eq!(build_register_request("F", "L", "", "pw"), Err("All fields are required."));
    assert_eq!(build_register_request("F", "L", "e@x.com", ""), Err("All fields are required."));
}
