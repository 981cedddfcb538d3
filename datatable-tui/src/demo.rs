//! Built-in people table used when no data file is given.

use datatable_lib::{Alignment, Column, Record};

const FIRST_NAMES: [&str; 12] = [
    "Maud", "Bert", "Ines", "Omar", "Zoe", "Ari", "Lena", "Tomas", "Priya", "Kenji", "Freya",
    "Malik",
];

const LAST_NAMES: [&str; 9] = [
    "Haverty", "Okafor", "Lindqvist", "Moreau", "Castillo", "Nakamura", "Brennan", "Osei",
    "Petrov",
];

const JOB_TITLES: [&str; 7] = [
    "Software Engineer",
    "Product Designer",
    "Data Analyst",
    "Account Executive",
    "Support Specialist",
    "Research Scientist",
    "Technical Writer",
];

/// Number of demo rows.
pub const DEMO_ROWS: usize = 48;

/// Columns of the people table.
pub fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").width(6).align(Alignment::Right),
        Column::new("firstName", "First Name"),
        Column::new("lastName", "Last Name"),
        Column::new("gender", "Gender").emphasis(),
        Column::new("email", "E-Mail"),
        Column::new("jobTitle", "Job Title"),
    ]
}

/// Deterministic people rows.
pub fn records() -> Vec<Record> {
    (0..DEMO_ROWS)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i * 5 + 2) % LAST_NAMES.len()];
            let gender = if i % 3 == 1 { "Male" } else { "Female" };
            let email = format!("{}.{}@example.com", first, last).to_lowercase();

            Record::new()
                .set("id", i as u64 + 1)
                .set("firstName", first)
                .set("lastName", last)
                .set("gender", gender)
                .set("email", email)
                .set("jobTitle", JOB_TITLES[(i * 3) % JOB_TITLES.len()])
        })
        .collect()
}
