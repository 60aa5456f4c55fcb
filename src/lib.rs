#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # bigbox
//!
//! JSON representations of the bigbox catalog: activities, boxes, categories
//! and their images and reasons.
//!
//! Each serializer projects a [SeaORM](https://www.sea-ql.org/SeaORM) model
//! onto a fixed, ordered list of fields and embeds the related child
//! collections a client needs:
//!
//! | Serializer            | Fields |
//! |-----------------------|--------|
//! | [`ReasonView`]        | `id`, `name`, `slug`, `order` |
//! | [`ActivityImageView`] | `id`, `order`, `upload` |
//! | [`ActivityView`]      | product fields, `internal_name`, `reasons`, `activityimage_set` |
//! | [`BoxImageView`]      | `id`, `order`, `upload` |
//! | [`BoxView`]           | product fields, `price`, `boximage_set` |
//! | [`BoxChildView`]      | `id`, `name`, `slug`, `price` |
//! | [`CategoryView`]      | `id`, `name`, `slug`, `order`, `description`, `box_set` |
//!
//! The product fields are `id`, `name`, `slug`, `description`, `category`
//! and `purchase_available`.
//!
//! ```
//! use bigbox::{Serializer, SerializerContext, BoxImageView, entity::box_image};
//!
//! let ctx = SerializerContext::default();
//! let image = box_image::Model {
//!     id: 3,
//!     box_id: 1,
//!     order: 0,
//!     upload: "boxes/summer.jpg".to_owned(),
//! };
//! let json = BoxImageView::new(image, &ctx).to_value().unwrap();
//! assert_eq!(json["upload"], "/media/boxes/summer.jpg");
//! ```
//!
//! Loading a model together with its nested collections is done by
//! [`CatalogQuery`]; writes go through [`CatalogMutation`], which validates
//! the input payloads first.

pub mod config;
pub mod entity;
mod error;
pub mod serializer;
pub mod service;

pub use config::*;
pub use error::*;
pub use serializer::*;
pub use service::*;
