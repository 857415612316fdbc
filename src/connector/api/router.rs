use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::GenerateController;

pub struct Router<'a> {
    generate_controller: GenerateController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            generate_controller: GenerateController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Generate { query, plain } => {
                self.generate_controller.generate(query, plain).await
            }
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
