pub mod categories;
pub mod register;
