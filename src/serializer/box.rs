use super::{
    BoxImageView, Input, Payload, Serializer, SerializerContext, ValidationErrors, price,
    validation::{NAME_MAX_LENGTH, check_char_field, check_price, check_slug},
};
use crate::entity::{r#box, box_image};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    IntoActiveModel,
    prelude::Decimal,
};
use serde::Serialize;

/// A box with its images, addressed by `slug`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxView {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: Option<i32>,
    pub purchase_available: bool,
    #[serde(serialize_with = "price::serialize")]
    pub price: Decimal,
    pub boximage_set: Vec<BoxImageView>,
}

impl Serializer for BoxView {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "slug",
        "description",
        "category",
        "purchase_available",
        "price",
        "boximage_set",
    ];

    const LOOKUP_FIELD: &'static str = "slug";
}

impl BoxView {
    pub fn new(
        model: r#box::Model,
        images: Vec<box_image::Model>,
        ctx: &SerializerContext,
    ) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            category: model.category_id,
            purchase_available: model.purchase_available,
            price: model.price,
            boximage_set: images
                .into_iter()
                .map(|image| BoxImageView::new(image, ctx))
                .collect(),
        }
    }
}

/// The abbreviated box embedded in a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxChildView {
    pub id: i32,
    pub name: String,
    pub slug: String,
    #[serde(serialize_with = "price::serialize")]
    pub price: Decimal,
}

impl Serializer for BoxChildView {
    const FIELDS: &'static [&'static str] = &["id", "name", "slug", "price"];
}

impl From<r#box::Model> for BoxChildView {
    fn from(model: r#box::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            price: model.price,
        }
    }
}

/// Write payload of a box; `price` may be a JSON string or number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxInput {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: Option<i32>,
    pub purchase_available: bool,
    pub price: Decimal,
}

impl Input for BoxInput {
    fn read(payload: &mut Payload<'_>) -> Self {
        Self {
            name: payload.string("name"),
            slug: payload.string("slug"),
            description: payload.string_or_empty("description"),
            category: payload.primary_key("category"),
            purchase_available: payload.boolean_or("purchase_available", false),
            price: payload.decimal("price"),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_char_field(&mut errors, "name", &self.name, NAME_MAX_LENGTH);
        check_slug(&mut errors, "slug", &self.slug);
        check_price(&mut errors, "price", &self.price);
        errors.into_result()
    }
}

impl IntoActiveModel<r#box::ActiveModel> for BoxInput {
    fn into_active_model(self) -> r#box::ActiveModel {
        r#box::ActiveModel {
            id: NotSet,
            name: Set(self.name.trim().to_owned()),
            slug: Set(self.slug.trim().to_owned()),
            description: Set(self.description.trim().to_owned()),
            category_id: Set(self.category),
            purchase_available: Set(self.purchase_available),
            price: Set(self.price),
        }
    }
}
