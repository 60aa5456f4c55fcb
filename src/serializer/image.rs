use super::{
    Input, Payload, Serializer, SerializerContext, ValidationErrors,
    validation::{UPLOAD_MAX_LENGTH, check_char_field, check_order},
};
use crate::entity::{activity_image, box_image};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::Serialize;

/// An image of an activity: `id`, `order`, `upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityImageView {
    pub id: i32,
    pub order: i32,
    pub upload: Option<String>,
}

impl Serializer for ActivityImageView {
    const FIELDS: &'static [&'static str] = &["id", "order", "upload"];
}

impl ActivityImageView {
    pub fn new(model: activity_image::Model, ctx: &SerializerContext) -> Self {
        Self {
            id: model.id,
            order: model.order,
            upload: ctx.media.url(&model.upload),
        }
    }
}

/// An image of a box: `id`, `order`, `upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxImageView {
    pub id: i32,
    pub order: i32,
    pub upload: Option<String>,
}

impl Serializer for BoxImageView {
    const FIELDS: &'static [&'static str] = &["id", "order", "upload"];
}

impl BoxImageView {
    pub fn new(model: box_image::Model, ctx: &SerializerContext) -> Self {
        Self {
            id: model.id,
            order: model.order,
            upload: ctx.media.url(&model.upload),
        }
    }
}

/// Write payload of an activity or box image; `upload` is the stored file
/// name relative to the media root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub order: i32,
    pub upload: String,
}

impl Input for ImageInput {
    fn read(payload: &mut Payload<'_>) -> Self {
        Self {
            order: payload.integer_or("order", 0),
            upload: payload.string("upload"),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_order(&mut errors, "order", self.order);
        check_char_field(&mut errors, "upload", &self.upload, UPLOAD_MAX_LENGTH);
        errors.into_result()
    }
}

impl ImageInput {
    pub fn into_activity_image(self, activity_id: i32) -> activity_image::ActiveModel {
        activity_image::ActiveModel {
            id: NotSet,
            activity_id: Set(activity_id),
            order: Set(self.order),
            upload: Set(self.upload.trim().to_owned()),
        }
    }

    pub fn into_box_image(self, box_id: i32) -> box_image::ActiveModel {
        box_image::ActiveModel {
            id: NotSet,
            box_id: Set(box_id),
            order: Set(self.order),
            upload: Set(self.upload.trim().to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::{MediaStorage, tests_util::assert_fields};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn activity_image_fields() {
        let ctx = SerializerContext::default();
        let view = ActivityImageView::new(
            activity_image::Model {
                id: 7,
                activity_id: 1,
                order: 2,
                upload: "activities/kayak.jpg".to_owned(),
            },
            &ctx,
        );
        assert_fields(&view);
        assert_eq!(
            view.to_value().unwrap(),
            json!({ "id": 7, "order": 2, "upload": "/media/activities/kayak.jpg" })
        );
    }

    #[test]
    fn box_image_without_file() {
        let ctx = SerializerContext::new(MediaStorage::new("https://cdn.example.com/media/"));
        let view = BoxImageView::new(
            box_image::Model {
                id: 1,
                box_id: 4,
                order: 0,
                upload: String::new(),
            },
            &ctx,
        );
        assert_fields(&view);
        assert_eq!(
            view.to_value().unwrap(),
            json!({ "id": 1, "order": 0, "upload": null })
        );
    }

    #[test]
    fn image_input() {
        let input = ImageInput::from_value(json!({ "id": 99, "upload": " boxes/a.jpg " })).unwrap();
        assert_eq!(input.order, 0);

        let model = input.into_box_image(4);
        assert_eq!(model.box_id, Set(4));
        assert_eq!(model.upload, Set("boxes/a.jpg".to_owned()));
        assert_eq!(model.id, NotSet);

        let err = ImageInput::from_value(json!({ "order": -1, "upload": "" })).unwrap_err();
        match err {
            crate::Error::Validation(errors) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), ["order", "upload"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
