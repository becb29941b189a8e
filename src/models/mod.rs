pub mod custom_exercise;
pub mod from_row;
pub mod muscle_group;
pub mod workout_session;

pub use custom_exercise::{CreateCustomExercise, CustomExercise};
pub use from_row::FromSqliteRow;
pub use workout_session::{CreateWorkoutSession, ExerciseEntry, SetEntry, WorkoutSession};
