//! Shared UI components for cove-mocks

mod link_card;

pub use link_card::LinkCard;
