//! UI Components
//!
//! Reusable Leptos components.

mod group_delete_button;
mod group_tree_node;
mod group_tree_view;
mod group_select;
mod group_editor;
mod groups_page;
mod account_group_picker;
mod party_accounts_panel;
mod status_bar;

pub use group_delete_button::GroupDeleteButton;
pub use group_tree_node::GroupTreeNode;
pub use group_tree_view::GroupTreeView;
pub use group_select::GroupSelect;
pub use group_editor::{EditorMode, GroupEditor};
pub use groups_page::GroupsPage;
pub use account_group_picker::AccountGroupPicker;
pub use party_accounts_panel::PartyAccountsPanel;
pub use status_bar::StatusBar;
