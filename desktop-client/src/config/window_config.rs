use common::config::Validate;
use common::games::tictactoe::BOARD_SIZE;
use serde::{Deserialize, Serialize};

pub const MIN_CELL_SIZE: u32 = 50;
pub const MAX_CELL_SIZE: u32 = 300;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub cell_size: u32,
}

impl WindowConfig {
    /// Side length of the square window in logical pixels.
    pub fn board_size(&self) -> f32 {
        (self.cell_size as usize * BOARD_SIZE) as f32
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size < MIN_CELL_SIZE || self.cell_size > MAX_CELL_SIZE {
            return Err(format!(
                "cell_size must be between {} and {}",
                MIN_CELL_SIZE, MAX_CELL_SIZE
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { cell_size: 100 }
    }
}
