pub mod cards;
pub mod chrome;
pub mod filters;
pub mod share;
