pub mod inventory_service;
pub mod rate_feed;
pub mod rate_poller;

pub use inventory_service::{InventoryService, NewJewelryItem};
pub use rate_feed::RateFeedService;
pub use rate_poller::RatePoller;
