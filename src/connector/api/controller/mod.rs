pub mod generate_controller;

pub use generate_controller::GenerateController;
