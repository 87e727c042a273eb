pub mod dice_body;
pub mod dice_body_system;
