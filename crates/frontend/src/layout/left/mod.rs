pub mod left;
pub mod sidebar;
