pub mod form_field;
pub mod stat_card;
