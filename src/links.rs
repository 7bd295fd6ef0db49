//! Deep-link builders for contact actions
//!
//! The detail screen turns a family's raw text fields into tappable links.
//! Mobile numbers are reduced to their digits before being embedded; free-text
//! fields are percent-encoded. A field with nothing usable in it yields `None`
//! and the caller simply renders no link.

use std::borrow::Cow;

/// `tel://` link for a mobile number, or `None` if the field has no digits
#[must_use]
pub fn phone_url(phone: &str) -> Option<String> {
    let digits = digits_of(phone);
    if digits.is_empty() {
        return None;
    }
    Some(format!("tel://{digits}"))
}

/// `sms:` link for a mobile number, or `None` if the field has no digits
#[must_use]
pub fn sms_url(phone: &str) -> Option<String> {
    let digits = digits_of(phone);
    if digits.is_empty() {
        return None;
    }
    Some(format!("sms:{digits}"))
}

/// `mailto:` link for an email address, or `None` for an empty field
#[must_use]
pub fn email_url(email: &str) -> Option<String> {
    if email.is_empty() {
        return None;
    }
    Some(format!("mailto:{}", encode(email)))
}

/// Map-search link for a postal address, or `None` for an empty field
#[must_use]
pub fn maps_url(address: &str) -> Option<String> {
    if address.is_empty() {
        return None;
    }
    Some(format!("http://maps.apple.com/?q={}", encode(address)))
}

/// Keep only ASCII digits
fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn encode(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}
