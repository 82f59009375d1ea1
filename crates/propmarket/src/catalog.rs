//! Label vocabulary the marketplace recognizes.
//!
//! These lists document the accepted labels for listings and borrower
//! profiles; the engine itself never rejects an unknown label, it falls back
//! to neutral behavior instead.

pub const PROPERTY_TYPES: &[&str] = &[
    "Apartment",
    "House",
    "Duplex",
    "Bungalow",
    "Flat",
    "Studio",
    "Penthouse",
    "Townhouse",
    "Villa",
    "Mansion",
];

pub const NIGERIAN_STATES: &[&str] = &[
    "Abia", "Adamawa", "Akwa Ibom", "Anambra", "Bauchi", "Bayelsa", "Benue", "Borno",
    "Cross River", "Delta", "Ebonyi", "Edo", "Ekiti", "Enugu", "Gombe", "Imo", "Jigawa",
    "Kaduna", "Kano", "Katsina", "Kebbi", "Kogi", "Kwara", "Lagos", "Nasarawa", "Niger",
    "Ogun", "Ondo", "Osun", "Oyo", "Plateau", "Rivers", "Sokoto", "Taraba", "Yobe",
    "Zamfara", "FCT",
];

pub const AMENITIES: &[&str] = &[
    "Parking",
    "Security",
    "Swimming Pool",
    "Gym",
    "Generator",
    "Air Conditioning",
    "Furnished",
    "Balcony",
    "Garden",
    "Elevator",
    "Wifi",
    "Laundry",
    "Pet Friendly",
    "Playground",
    "CCTV",
    "24/7 Water",
    "Solar Power",
    "Gated Estate",
];

pub const EMPLOYMENT_TYPES: &[&str] = &[
    "Employed",
    "Self-Employed",
    "Business Owner",
    "Retired",
    "Student",
    "Other",
];

pub const MORTGAGE_TYPES: &[&str] = &[
    "Conventional Mortgage",
    "FHA Loan",
    "NHF Loan",
    "Commercial Mortgage",
    "Construction Loan",
    "Refinance",
];
