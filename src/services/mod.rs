pub mod password;
pub use password::{PasswordError, PasswordHasher};

pub mod registration;
pub use registration::{RegistrationError, RegistrationRequest, ValidatedRegistration};

pub mod token;
pub use token::{TokenClaims, TokenError, TokenKeys};

pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService, LoginResult};
pub use auth_service_impl::SeaOrmAuthService;

pub mod course_service;
pub mod course_service_impl;
pub use course_service::{CourseError, CourseService};
pub use course_service_impl::SeaOrmCourseService;
