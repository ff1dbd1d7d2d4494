pub mod diagnosis_badge;
pub mod drop_zone;
pub mod result_card;
pub mod sidebar;
