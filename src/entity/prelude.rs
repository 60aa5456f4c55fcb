pub use super::activity::Entity as Activity;
pub use super::activity_image::Entity as ActivityImage;
pub use super::activity_reason::Entity as ActivityReason;
pub use super::r#box::Entity as CatalogBox;
pub use super::box_image::Entity as BoxImage;
pub use super::category::Entity as Category;
pub use super::reason::Entity as Reason;
