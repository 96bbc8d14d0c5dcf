pub mod movement;

pub use movement::Movement;
