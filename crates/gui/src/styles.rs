//! Styling constants and theme configuration

use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.94, 0.85, 0.71); // Wheat
pub const DARK_SQUARE: Color = Color::from_rgb(0.71, 0.53, 0.39); // Sienna
pub const PIECE_CURSOR: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const DESTINATION_CURSOR: Color = Color::from_rgb(0.45, 0.70, 0.90); // Sky blue
pub const LAST_MOVE_SQUARE: Color = Color::from_rgba(0.9, 0.9, 0.0, 0.4); // Yellow overlay

// Pieces
pub const FIRST_PIECE: Color = Color::from_rgb(0.96, 0.96, 0.92);
pub const SECOND_PIECE: Color = Color::from_rgb(0.55, 0.08, 0.08);

// Board frame, red while an illegal attempt is flagged
pub const BOARD_BORDER: Color = Color::from_rgb(0.3, 0.3, 0.3);
pub const ILLEGAL_BORDER: Color = Color::from_rgb(0.85, 0.15, 0.15);

// Dimensions
pub const SQUARE_SIZE: f32 = 70.0;
pub const PANEL_WIDTH: f32 = 320.0;
