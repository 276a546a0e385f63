//! Page components wired into the router.

pub mod dashboard;
pub mod login;
pub mod signup;
