pub mod course;
pub mod department;
pub mod user;

pub use course::{Course, NewCourse};
pub use department::Department;
pub use user::{NewUser, User};
