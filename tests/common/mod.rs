#![allow(dead_code)]

use bigbox::entity::{activity, activity_image, activity_reason, r#box, box_image, category, reason};
use sea_orm::prelude::Decimal;

pub use bigbox::json_keys as keys;

pub fn category_model(id: i32, slug: &str) -> category::Model {
    category::Model {
        id,
        name: format!("Category {id}"),
        slug: slug.to_owned(),
        order: id,
        description: format!("About {slug}"),
    }
}

pub fn reason_model(id: i32, order: i32) -> reason::Model {
    reason::Model {
        id,
        name: format!("Reason {id}"),
        slug: format!("reason-{id}"),
        order,
    }
}

pub fn activity_model(id: i32, category_id: Option<i32>) -> activity::Model {
    activity::Model {
        id,
        name: format!("Activity {id}"),
        slug: format!("activity-{id}"),
        description: "Outdoors".to_owned(),
        category_id,
        purchase_available: true,
        internal_name: format!("ACT-{id}"),
    }
}

pub fn activity_reason_model(activity_id: i32, reason_id: i32) -> activity_reason::Model {
    activity_reason::Model {
        activity_id,
        reason_id,
    }
}

pub fn activity_image_model(id: i32, activity_id: i32, order: i32) -> activity_image::Model {
    activity_image::Model {
        id,
        activity_id,
        order,
        upload: format!("activities/{id}.jpg"),
    }
}

pub fn box_model(id: i32, slug: &str, category_id: Option<i32>, cents: i64) -> r#box::Model {
    r#box::Model {
        id,
        name: format!("Box {id}"),
        slug: slug.to_owned(),
        description: "A gift".to_owned(),
        category_id,
        purchase_available: false,
        price: Decimal::new(cents, 2),
    }
}

pub fn box_image_model(id: i32, box_id: i32, order: i32) -> box_image::Model {
    box_image::Model {
        id,
        box_id,
        order,
        upload: format!("boxes/{id}.jpg"),
    }
}
