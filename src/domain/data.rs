// Built-in data set checked by the CLI.

use crate::domain::model::{AgeRegistry, TestRoster};

pub fn people_ages() -> AgeRegistry {
    [
        ("Sultan", 18),
        ("Aruzhan", 19),
        ("Dias", 20),
        ("Amina", 17),
        ("Timur", 25),
    ]
    .into_iter()
    .collect()
}

pub fn test_names() -> TestRoster {
    ["Dias", "Timur", "Sultan", "Ali", "Amina"]
        .into_iter()
        .collect()
}
