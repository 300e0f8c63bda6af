pub mod agencies;
pub mod repos;
pub mod suggest;
pub mod tasks;
