//! Indian states and union territories offered by the state pickers.

pub const INDIAN_STATES: [&str; 36] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// Return the state after (or before, when `forward` is false) `current`,
/// wrapping around. An empty or unknown selection starts at either end.
///
pub fn cycle_state(current: &str, forward: bool) -> &'static str {
    let last = INDIAN_STATES.len() - 1;
    let index = match INDIAN_STATES.iter().position(|state| *state == current) {
        Some(index) if forward => (index + 1) % INDIAN_STATES.len(),
        Some(0) => last,
        Some(index) => index - 1,
        None if forward => 0,
        None => last,
    };
    INDIAN_STATES[index]
}

/// Format a ten digit mobile number for display, e.g. `+91 98765 43210`.
/// Anything else is returned unchanged.
///
pub fn format_mobile(mobile: &str) -> String {
    if mobile.len() != 10 || !mobile.is_ascii() {
        return mobile.to_string();
    }
    format!("+91 {} {}", &mobile[..5], &mobile[5..])
}
