//! Per-row field normalizers.
//!
//! - **dob**: date-of-birth parsing with precision labels
//! - **country**: country cleansing and variant standardization
//! - **name**: display-name construction

pub mod country;
pub mod dob;
pub mod name;

pub use country::{CountryMap, clean_country_string};
pub use dob::parse_dob;
pub use name::build_display_name;
