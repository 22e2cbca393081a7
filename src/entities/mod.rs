pub mod prelude;

pub mod courses;
pub mod users;
