pub mod airplane_type;
pub mod flight;
pub mod seats;
