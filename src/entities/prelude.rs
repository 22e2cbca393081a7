pub use super::courses::Entity as Courses;
pub use super::users::Entity as Users;
