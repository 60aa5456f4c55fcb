use super::{
    BoxChildView, Input, Payload, Serializer, ValidationErrors,
    validation::{NAME_MAX_LENGTH, check_char_field, check_order, check_slug},
};
use crate::entity::{r#box, category};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    IntoActiveModel,
};
use serde::Serialize;

/// A category with the boxes filed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub order: i32,
    pub description: String,
    pub box_set: Vec<BoxChildView>,
}

impl Serializer for CategoryView {
    const FIELDS: &'static [&'static str] =
        &["id", "name", "slug", "order", "description", "box_set"];
}

impl CategoryView {
    pub fn new(model: category::Model, boxes: Vec<r#box::Model>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            order: model.order,
            description: model.description,
            box_set: boxes.into_iter().map(BoxChildView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    pub order: i32,
    pub description: String,
}

impl Input for CategoryInput {
    fn read(payload: &mut Payload<'_>) -> Self {
        Self {
            name: payload.string("name"),
            slug: payload.string("slug"),
            order: payload.integer_or("order", 0),
            description: payload.string_or_empty("description"),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_char_field(&mut errors, "name", &self.name, NAME_MAX_LENGTH);
        check_slug(&mut errors, "slug", &self.slug);
        check_order(&mut errors, "order", self.order);
        errors.into_result()
    }
}

impl IntoActiveModel<category::ActiveModel> for CategoryInput {
    fn into_active_model(self) -> category::ActiveModel {
        category::ActiveModel {
            id: NotSet,
            name: Set(self.name.trim().to_owned()),
            slug: Set(self.slug.trim().to_owned()),
            order: Set(self.order),
            description: Set(self.description.trim().to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::{COMMON_FIELDS, tests_util::{assert_fields, keys}};
    use pretty_assertions::assert_eq;
    use sea_orm::prelude::Decimal;
    use serde_json::json;

    #[test]
    fn fields_with_child_boxes() {
        let view = CategoryView::new(
            category::Model {
                id: 1,
                name: "Outdoor".to_owned(),
                slug: "outdoor".to_owned(),
                order: 0,
                description: "Fresh air".to_owned(),
            },
            vec![r#box::Model {
                id: 3,
                name: "Summer box".to_owned(),
                slug: "summer-box".to_owned(),
                description: "Three outdoor activities".to_owned(),
                category_id: Some(1),
                purchase_available: false,
                price: Decimal::new(4990, 2),
            }],
        );
        assert_fields(&view);
        assert!(CategoryView::FIELDS.starts_with(&COMMON_FIELDS));

        let value = view.to_value().unwrap();
        assert_eq!(
            value["box_set"],
            json!([{ "id": 3, "name": "Summer box", "slug": "summer-box", "price": "49.90" }])
        );
        assert_eq!(keys(&value["box_set"][0]), BoxChildView::FIELDS);
    }

    #[test]
    fn empty_box_set() {
        let view = CategoryView::new(
            category::Model {
                id: 2,
                name: "Indoor".to_owned(),
                slug: "indoor".to_owned(),
                order: 1,
                description: String::new(),
            },
            vec![],
        );
        assert_eq!(view.to_value().unwrap()["box_set"], json!([]));
    }

    #[test]
    fn input() {
        let model = CategoryInput::from_value(json!({ "name": "Outdoor", "slug": "outdoor" }))
            .unwrap()
            .into_active_model();
        assert_eq!(model.order, Set(0));
        assert_eq!(model.description, Set(String::new()));
    }

    #[test]
    fn input_mistyped_order_reported_with_the_rest() {
        let err = CategoryInput::from_value(json!({
            "name": "x",
            "slug": "bad slug",
            "order": "abc",
            "description": null,
        }))
        .unwrap_err();
        let crate::Error::Validation(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "description": ["This field may not be null."],
                "order": ["A valid integer is required."],
                "slug": ["Enter a valid “slug” consisting of letters, numbers, underscores or hyphens."],
            })
        );
    }
}
