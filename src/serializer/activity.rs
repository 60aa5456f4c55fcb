use super::{
    ActivityImageView, Input, Payload, ReasonView, Serializer, SerializerContext, ValidationErrors,
    validation::{NAME_MAX_LENGTH, check_char_field, check_slug},
};
use crate::entity::{activity, activity_image, reason};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    IntoActiveModel,
};
use serde::Serialize;

/// An activity with its reasons and images
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: Option<i32>,
    pub purchase_available: bool,
    pub internal_name: String,
    pub reasons: Vec<ReasonView>,
    pub activityimage_set: Vec<ActivityImageView>,
}

impl Serializer for ActivityView {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "slug",
        "description",
        "category",
        "purchase_available",
        "internal_name",
        "reasons",
        "activityimage_set",
    ];
}

impl ActivityView {
    pub fn new(
        model: activity::Model,
        reasons: Vec<reason::Model>,
        images: Vec<activity_image::Model>,
        ctx: &SerializerContext,
    ) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            category: model.category_id,
            purchase_available: model.purchase_available,
            internal_name: model.internal_name,
            reasons: reasons.into_iter().map(ReasonView::from).collect(),
            activityimage_set: images
                .into_iter()
                .map(|image| ActivityImageView::new(image, ctx))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityInput {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: Option<i32>,
    pub purchase_available: bool,
    pub internal_name: String,
}

impl Input for ActivityInput {
    fn read(payload: &mut Payload<'_>) -> Self {
        Self {
            name: payload.string("name"),
            slug: payload.string("slug"),
            description: payload.string_or_empty("description"),
            category: payload.primary_key("category"),
            purchase_available: payload.boolean_or("purchase_available", false),
            internal_name: payload.string("internal_name"),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_char_field(&mut errors, "name", &self.name, NAME_MAX_LENGTH);
        check_slug(&mut errors, "slug", &self.slug);
        check_char_field(
            &mut errors,
            "internal_name",
            &self.internal_name,
            NAME_MAX_LENGTH,
        );
        errors.into_result()
    }
}

impl IntoActiveModel<activity::ActiveModel> for ActivityInput {
    fn into_active_model(self) -> activity::ActiveModel {
        activity::ActiveModel {
            id: NotSet,
            name: Set(self.name.trim().to_owned()),
            slug: Set(self.slug.trim().to_owned()),
            description: Set(self.description.trim().to_owned()),
            category_id: Set(self.category),
            purchase_available: Set(self.purchase_available),
            internal_name: Set(self.internal_name.trim().to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::tests_util::{assert_fields, keys};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn kayaking() -> activity::Model {
        activity::Model {
            id: 1,
            name: "Kayaking".to_owned(),
            slug: "kayaking".to_owned(),
            description: "Two hours on the lake".to_owned(),
            category_id: Some(2),
            purchase_available: true,
            internal_name: "KAYAK-2H".to_owned(),
        }
    }

    #[test]
    fn fields_without_children() {
        let view = ActivityView::new(kayaking(), vec![], vec![], &SerializerContext::default());
        assert_fields(&view);

        let value = view.to_value().unwrap();
        assert_eq!(value["reasons"], json!([]));
        assert_eq!(value["activityimage_set"], json!([]));
        assert_eq!(value["category"], json!(2));
    }

    #[test]
    fn nested_children() {
        let view = ActivityView::new(
            activity::Model {
                category_id: None,
                ..kayaking()
            },
            vec![reason::Model {
                id: 5,
                name: "Fresh air".to_owned(),
                slug: "fresh-air".to_owned(),
                order: 1,
            }],
            vec![activity_image::Model {
                id: 9,
                activity_id: 1,
                order: 0,
                upload: "activities/kayak.jpg".to_owned(),
            }],
            &SerializerContext::default(),
        );
        let value = view.to_value().unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Kayaking",
                "slug": "kayaking",
                "description": "Two hours on the lake",
                "category": null,
                "purchase_available": true,
                "internal_name": "KAYAK-2H",
                "reasons": [
                    { "id": 5, "name": "Fresh air", "slug": "fresh-air", "order": 1 }
                ],
                "activityimage_set": [
                    { "id": 9, "order": 0, "upload": "/media/activities/kayak.jpg" }
                ],
            })
        );
        assert_eq!(keys(&value["reasons"][0]), ReasonView::FIELDS);
        assert_eq!(keys(&value["activityimage_set"][0]), ActivityImageView::FIELDS);
    }

    #[test]
    fn input_ignores_read_only_fields() {
        let input = ActivityInput::from_value(json!({
            "id": 42,
            "name": "Kayaking",
            "slug": "kayaking",
            "internal_name": "KAYAK-2H",
            "reasons": [1, 2],
            "activityimage_set": [],
        }))
        .unwrap();
        assert_eq!(input.category, None);
        assert!(!input.purchase_available);

        let model = input.into_active_model();
        assert_eq!(model.id, NotSet);
        assert_eq!(model.description, Set(String::new()));
    }

    #[test]
    fn input_collects_all_errors() {
        let err = ActivityInput::from_value(json!({
            "name": "",
            "slug": "kayak ing",
            "internal_name": "",
        }))
        .unwrap_err();
        let crate::Error::Validation(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            ["internal_name", "name", "slug"]
        );
    }
}
