pub mod dish_ref;
pub mod extraction_target;
pub mod generation_result;
pub mod menu_idea;
pub mod week_plan;

pub use dish_ref::*;
pub use extraction_target::*;
pub use generation_result::*;
pub use menu_idea::*;
pub use week_plan::*;
