pub mod airplane_type;
pub mod flight;
