//! Testing utilities for picklist
//!
//! Fixture option lists and small helpers shared by the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

/// Convert string slices into owned labels
#[must_use]
pub fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Fuel brands, as shown by a brand picker
#[must_use]
pub fn brands() -> Vec<String> {
    labels(&[
        "Shell",
        "Petron",
        "Caltex",
        "Phoenix Petroleum",
        "Seaoil",
        "Unioil",
        "Jetti",
        "Total",
    ])
}

/// Municipalities, as shown by a location picker
#[must_use]
pub fn municipalities() -> Vec<String> {
    labels(&[
        "Batangas City",
        "Lipa City",
        "Tanauan City",
        "Santo Tomas",
        "Malvar",
        "San Jose",
        "San Juan",
    ])
}
