pub mod jewelry_item_repository;
pub mod rate_snapshot_repository;

// Re-export all repositories for convenient access
pub use jewelry_item_repository::JewelryItemRepository;
pub use rate_snapshot_repository::RateSnapshotRepository;
