pub mod building;
pub mod person;
pub mod statistics;
