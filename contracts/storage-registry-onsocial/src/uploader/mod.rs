mod booking;
mod views;

pub use views::CapacityUsage;
