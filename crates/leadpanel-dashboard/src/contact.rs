// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact link helpers for reaching a lead directly.

/// Strips everything but ASCII digits from a free-form phone number.
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Builds a WhatsApp deep link (`https://wa.me/<cc><digits>`) for a lead's
/// phone number. Returns `None` when the number contains no digits at all.
pub fn whatsapp_link(raw: &str, country_code: &str) -> Option<String> {
    let digits = phone_digits(raw);
    if digits.is_empty() {
        return None;
    }
    Some(format!("https://wa.me/{country_code}{digits}"))
}
