//! UI Components
//!
//! Presentation components for the list view.

mod button_randomizer;
mod delete_confirm_button;
mod input_item;
mod list_row;
mod render_list;

pub use button_randomizer::ButtonRandomizer;
pub use delete_confirm_button::DeleteConfirmButton;
pub use input_item::InputItem;
pub use list_row::ListRow;
pub use render_list::RenderList;
