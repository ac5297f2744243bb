pub mod contact;
pub mod explorer;
pub mod panels;
pub mod profile;
pub mod publications;
pub mod table;
