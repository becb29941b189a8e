/// Sentinel muscle group under which the exercise name is free text.
pub const OTHER: &str = "Other";

pub const MUSCLE_GROUPS: &[&str] = &[
    "Abdominals",
    "Abductors",
    "Adductors",
    "Biceps",
    "Calves",
    "Chest",
    "Forearms",
    "Glutes",
    "Hamstrings",
    "Lats",
    "Lower back",
    "Middle back",
    "Neck",
    "Quadriceps",
    "Shoulders",
    "Traps",
    "Triceps",
    OTHER,
];

/// Repeated sessions may carry the sentinel lowercased, so match loosely.
pub fn is_other(group: &str) -> bool {
    group.trim().eq_ignore_ascii_case(OTHER)
}

pub fn is_known(group: &str) -> bool {
    MUSCLE_GROUPS.contains(&group)
}

/// Whether a submitted muscle group may be stored.
pub fn is_accepted(group: &str) -> bool {
    is_known(group) || is_other(group)
}
