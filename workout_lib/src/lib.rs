pub mod capabilities;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod form;
pub mod headless;
pub mod locale;
pub mod render;
pub mod workout;

pub use controller::{SessionController, SessionState};
pub use error::{GeolocationError, InvalidInput, WorkoutError};
pub use workout::{Coords, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
