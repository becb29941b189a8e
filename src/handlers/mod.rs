pub mod custom_exercises;
pub mod health;
pub mod progress;
pub mod sessions;
