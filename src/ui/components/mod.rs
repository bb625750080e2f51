pub mod back_button;
pub mod result_panel;
pub mod select_field;
pub mod toast;
