pub mod analyze_image;
pub mod generate_menu;
