//! Application services and the student table view-model.

pub mod chrome;
pub mod error;
pub mod events;
pub mod repos;
pub mod stream;
pub mod students;
pub mod table;
