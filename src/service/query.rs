use crate::{
    Result,
    entity::{activity, activity_image, activity_reason, r#box, box_image, category, reason},
    serializer::{ActivityView, BoxView, CategoryView, ReasonView, SerializerContext},
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, LoaderTrait, QueryFilter, QueryOrder};
use tracing::{debug, instrument};

/// Read side of the catalog: loads root models with their nested
/// collections and turns them into views.
#[derive(Debug)]
pub struct CatalogQuery;

impl CatalogQuery {
    pub async fn list_reasons<C>(db: &C) -> Result<Vec<ReasonView>>
    where
        C: ConnectionTrait,
    {
        let reasons = reason::Entity::find()
            .order_by_asc(reason::Column::Order)
            .order_by_asc(reason::Column::Id)
            .all(db)
            .await?;
        Ok(reasons.into_iter().map(ReasonView::from).collect())
    }

    pub async fn find_reason_by_id<C>(db: &C, id: i32) -> Result<Option<ReasonView>>
    where
        C: ConnectionTrait,
    {
        let reason = reason::Entity::find_by_id(id).one(db).await?;
        Ok(reason.map(ReasonView::from))
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn list_activities<C>(db: &C, ctx: &SerializerContext) -> Result<Vec<ActivityView>>
    where
        C: ConnectionTrait,
    {
        let activities = activity::Entity::find()
            .order_by_asc(activity::Column::Id)
            .all(db)
            .await?;
        Self::activity_views(db, ctx, activities).await
    }

    #[instrument(level = "debug", skip(db, ctx))]
    pub async fn find_activity_by_id<C>(
        db: &C,
        ctx: &SerializerContext,
        id: i32,
    ) -> Result<Option<ActivityView>>
    where
        C: ConnectionTrait,
    {
        let Some(activity) = activity::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        let mut views = Self::activity_views(db, ctx, vec![activity]).await?;
        Ok(views.pop())
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn list_boxes<C>(db: &C, ctx: &SerializerContext) -> Result<Vec<BoxView>>
    where
        C: ConnectionTrait,
    {
        let boxes = r#box::Entity::find()
            .order_by_asc(r#box::Column::Id)
            .all(db)
            .await?;
        Self::box_views(db, ctx, boxes).await
    }

    #[instrument(level = "debug", skip(db, ctx))]
    pub async fn find_box_by_slug<C>(
        db: &C,
        ctx: &SerializerContext,
        slug: &str,
    ) -> Result<Option<BoxView>>
    where
        C: ConnectionTrait,
    {
        let Some(model) = r#box::Entity::find()
            .filter(r#box::Column::Slug.eq(slug))
            .one(db)
            .await?
        else {
            return Ok(None);
        };
        let mut views = Self::box_views(db, ctx, vec![model]).await?;
        Ok(views.pop())
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn list_categories<C>(db: &C) -> Result<Vec<CategoryView>>
    where
        C: ConnectionTrait,
    {
        let categories = category::Entity::find()
            .order_by_asc(category::Column::Order)
            .order_by_asc(category::Column::Id)
            .all(db)
            .await?;
        Self::category_views(db, categories).await
    }

    #[instrument(level = "debug", skip(db))]
    pub async fn find_category_by_id<C>(db: &C, id: i32) -> Result<Option<CategoryView>>
    where
        C: ConnectionTrait,
    {
        let Some(model) = category::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        let mut views = Self::category_views(db, vec![model]).await?;
        Ok(views.pop())
    }

    pub(crate) async fn activity_views<C>(
        db: &C,
        ctx: &SerializerContext,
        activities: Vec<activity::Model>,
    ) -> Result<Vec<ActivityView>>
    where
        C: ConnectionTrait,
    {
        if activities.is_empty() {
            return Ok(Vec::new());
        }

        let reasons = activities
            .load_many_to_many(reason::Entity, activity_reason::Entity, db)
            .await?;
        let images = activities
            .load_many(
                activity_image::Entity::find()
                    .order_by_asc(activity_image::Column::Order)
                    .order_by_asc(activity_image::Column::Id),
                db,
            )
            .await?;
        debug!(activities = activities.len(), "loaded reasons and images");

        Ok(activities
            .into_iter()
            .zip(reasons)
            .zip(images)
            .map(|((activity, mut reasons), mut images)| {
                reasons.sort_by_key(|reason| (reason.order, reason.id));
                images.sort_by_key(|image| (image.order, image.id));
                ActivityView::new(activity, reasons, images, ctx)
            })
            .collect())
    }

    pub(crate) async fn box_views<C>(
        db: &C,
        ctx: &SerializerContext,
        boxes: Vec<r#box::Model>,
    ) -> Result<Vec<BoxView>>
    where
        C: ConnectionTrait,
    {
        if boxes.is_empty() {
            return Ok(Vec::new());
        }

        let images = boxes
            .load_many(
                box_image::Entity::find()
                    .order_by_asc(box_image::Column::Order)
                    .order_by_asc(box_image::Column::Id),
                db,
            )
            .await?;
        debug!(boxes = boxes.len(), "loaded box images");

        Ok(boxes
            .into_iter()
            .zip(images)
            .map(|(model, mut images)| {
                images.sort_by_key(|image| (image.order, image.id));
                BoxView::new(model, images, ctx)
            })
            .collect())
    }

    pub(crate) async fn category_views<C>(
        db: &C,
        categories: Vec<category::Model>,
    ) -> Result<Vec<CategoryView>>
    where
        C: ConnectionTrait,
    {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let boxes = categories
            .load_many(r#box::Entity::find().order_by_asc(r#box::Column::Id), db)
            .await?;
        debug!(categories = categories.len(), "loaded child boxes");

        Ok(categories
            .into_iter()
            .zip(boxes)
            .map(|(model, boxes)| CategoryView::new(model, boxes))
            .collect())
    }
}
