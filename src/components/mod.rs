//! UI Components
//!
//! Reusable Leptos components.

mod quantity_stepper;
mod new_item_form;
mod grocery_item_card;
mod item_list;
mod purchase_button;
mod purchase_history;
mod failure_banner;
mod delete_confirm_button;

pub use quantity_stepper::QuantityStepper;
pub use new_item_form::NewItemForm;
pub use grocery_item_card::GroceryItemCard;
pub use item_list::ItemList;
pub use purchase_button::PurchaseButton;
pub use purchase_history::PurchaseHistory;
pub use failure_banner::FailureBanner;
pub use delete_confirm_button::DeleteConfirmButton;
