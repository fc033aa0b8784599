//! Business logic layer between the command/API surfaces and the data layer.

pub mod fraud;
pub mod oauth;
pub mod rank;
pub mod validator;
pub mod verification;

#[cfg(test)]
pub(crate) mod test;
