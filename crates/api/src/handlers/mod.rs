pub mod admin_templates;
pub mod media;
pub mod templates;
pub mod uploads;
pub mod websites;
