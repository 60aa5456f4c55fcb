use super::{
    Input, Payload, Serializer, ValidationErrors,
    validation::{NAME_MAX_LENGTH, check_char_field, check_order, check_slug},
};
use crate::entity::reason;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    IntoActiveModel,
};
use serde::Serialize;

/// A reason to book an activity: `id`, `name`, `slug`, `order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasonView {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub order: i32,
}

impl Serializer for ReasonView {
    const FIELDS: &'static [&'static str] = &["id", "name", "slug", "order"];
}

impl From<reason::Model> for ReasonView {
    fn from(model: reason::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            order: model.order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonInput {
    pub name: String,
    pub slug: String,
    pub order: i32,
}

impl Input for ReasonInput {
    fn read(payload: &mut Payload<'_>) -> Self {
        Self {
            name: payload.string("name"),
            slug: payload.string("slug"),
            order: payload.integer_or("order", 0),
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

impl IntoActiveModel<reason::ActiveModel> for ReasonInput {
    fn into_active_model(self) -> reason::ActiveModel {
        reason::ActiveModel {
            id: NotSet,
            name: Set(self.name.trim().to_owned()),
            slug: Set(self.slug.trim().to_owned()),
            order: Set(self.order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::tests_util::assert_fields;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn fields() {
        let view = ReasonView::from(reason::Model {
            id: 1,
            name: "Fresh air".to_owned(),
            slug: "fresh-air".to_owned(),
            order: 3,
        });
        assert_fields(&view);
        assert_eq!(
            view.to_json().unwrap(),
            r#"{"id":1,"name":"Fresh air","slug":"fresh-air","order":3}"#
        );
    }

    #[test]
    fn input() {
        let input = ReasonInput::from_json(r#"{"name": " Fresh air ", "slug": "fresh-air"}"#)
            .unwrap()
            .into_active_model();
        assert_eq!(input.name, Set("Fresh air".to_owned()));
        assert_eq!(input.order, Set(0));

        assert!(matches!(
            ReasonInput::from_json(r#"{"slug": "#),
            Err(crate::Error::Json(_))
        ));
    }

    #[test]
    fn missing_field_reported_with_the_rest() {
        let err = ReasonInput::from_value(json!({ "slug": "bad slug", "order": -1 })).unwrap_err();
        let crate::Error::Validation(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "name": ["This field is required."],
                "order": ["Ensure this value is greater than or equal to 0."],
                "slug": ["Enter a valid “slug” consisting of letters, numbers, underscores or hyphens."],
            })
        );
    }
}
