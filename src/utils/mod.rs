pub mod format;
pub mod icons;
pub mod product_validator;
pub mod time;
