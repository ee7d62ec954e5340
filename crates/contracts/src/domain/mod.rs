pub mod clients;
pub mod signup;
