pub mod custom_exercise_repo;
pub mod workout_repo;

pub use custom_exercise_repo::CustomExerciseRepository;
pub use workout_repo::WorkoutRepository;
