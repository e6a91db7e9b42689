use num_format::{Locale, ToFormattedString};

/// Formats whole pesos with thousands separators, e.g. `₱13,800`.
pub fn format_peso(amount: u64) -> String {
    format!("₱{}", amount.to_formatted_string(&Locale::en))
}
