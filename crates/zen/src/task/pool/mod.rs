mod manager;
mod worker;

pub use manager::*;
