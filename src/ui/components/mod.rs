//! Shared UI components

pub mod back_link;
pub mod metric_card;
pub mod tab_button;

pub use back_link::BackLink;
pub use metric_card::MetricCard;
pub use tab_button::TabButton;
