pub mod empty_state;
pub mod header;
pub mod loader;
pub mod pagination;
pub mod sidebar;
pub mod table_view;
pub mod tabs;
pub mod toolbar;
pub mod warning_modal;
