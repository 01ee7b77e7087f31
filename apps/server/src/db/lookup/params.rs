//! Lookup filter parsing and sanitization
//!
//! Query parameters understood by the lookup:
//! - `medicine` / `term`: medicine name substring (`medicine` wins when non-blank)
//! - `medicine_id`: exact medicine id, parsed leniently; values `<= 0` are ignored
//! - `pincode`: store postal code, reduced to its digits
//!
//! Repeated keys resolve to the last occurrence. Unknown keys are ignored.

use crate::{Error, Result};

/// Sanitized lookup filters. Absent filters are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreFilter {
    pub medicine_name: Option<String>,
    pub medicine_id: Option<i64>,
    pub pincode: Option<String>,
}

impl StoreFilter {
    /// Build filters from decoded query items in request order.
    pub fn from_items(items: &[(String, String)]) -> Self {
        let last = |key: &str| {
            items
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        let medicine_name = [last("medicine"), last("term")]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .map(str::to_string);

        let medicine_id = last("medicine_id")
            .map(parse_lenient_int)
            .filter(|id| *id > 0);

        let pincode = last("pincode")
            .map(digits_only)
            .filter(|code| !code.is_empty());

        Self {
            medicine_name,
            medicine_id,
            pincode,
        }
    }

    /// Build filters from a raw (still percent-encoded) query string.
    pub fn from_query_string(raw_query: Option<&str>) -> Self {
        let items: Vec<(String, String)> = raw_query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();
        Self::from_items(&items)
    }

    pub fn is_empty(&self) -> bool {
        self.medicine_name.is_none() && self.medicine_id.is_none() && self.pincode.is_none()
    }

    /// Reject a filter set that would match every availability row.
    pub fn require_any(self) -> Result<Self> {
        if self.is_empty() {
            return Err(Error::MissingFilter);
        }
        Ok(self)
    }
}

/// Integer conversion that never fails: skips leading whitespace, accepts an
/// optional sign, reads leading digits and ignores the rest. No digits gives 0;
/// out-of-range values saturate.
pub(crate) fn parse_lenient_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

pub(crate) fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
