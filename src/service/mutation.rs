use super::CatalogQuery;
use crate::{
    Error, Result,
    entity::{activity, activity_reason, r#box, category, reason},
    serializer::{
        ActivityImageView, ActivityInput, ActivityView, BoxImageView, BoxInput, BoxView,
        CategoryInput, CategoryView, ImageInput, Input, ReasonInput, ReasonView, SerializerContext,
        ValidationErrors,
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::{info, instrument};

/// Write side of the catalog.
///
/// Every write validates its payload first; uniqueness of `slug` and the
/// existence of the referenced `category` are checked against the database
/// and reported as field errors alongside the payload's own.
#[derive(Debug)]
pub struct CatalogMutation;

impl CatalogMutation {
    #[instrument(level = "debug", skip_all)]
    pub async fn create_reason<C>(db: &C, input: ReasonInput) -> Result<ReasonView>
    where
        C: ConnectionTrait,
    {
        let mut errors = field_errors(&input);
        check_unique_slug::<reason::Entity, _>(
            db,
            reason::Column::Slug,
            reason::Column::Id,
            &input.slug,
            None,
            &mut errors,
        )
        .await?;
        errors.into_result()?;

        let model = input.into_active_model().insert(db).await?;
        info!(id = model.id, slug = %model.slug, "created reason");
        Ok(model.into())
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn create_category<C>(db: &C, input: CategoryInput) -> Result<CategoryView>
    where
        C: ConnectionTrait,
    {
        let mut errors = field_errors(&input);
        check_unique_slug::<category::Entity, _>(
            db,
            category::Column::Slug,
            category::Column::Id,
            &input.slug,
            None,
            &mut errors,
        )
        .await?;
        errors.into_result()?;

        let model = input.into_active_model().insert(db).await?;
        info!(id = model.id, slug = %model.slug, "created category");
        Ok(CategoryView::new(model, Vec::new()))
    }

    #[instrument(level = "debug", skip(db, input))]
    pub async fn update_category<C>(db: &C, id: i32, input: CategoryInput) -> Result<CategoryView>
    where
        C: ConnectionTrait,
    {
        category::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| Error::not_found("category", "id", id))?;

        let mut errors = field_errors(&input);
        check_unique_slug::<category::Entity, _>(
            db,
            category::Column::Slug,
            category::Column::Id,
            &input.slug,
            Some(id),
            &mut errors,
        )
        .await?;
        errors.into_result()?;

        let mut model = input.into_active_model();
        model.id = Unchanged(id);
        let model = model.update(db).await?;
        info!(id, "updated category");

        let boxes = model
            .find_related(r#box::Entity)
            .order_by_asc(r#box::Column::Id)
            .all(db)
            .await?;
        Ok(CategoryView::new(model, boxes))
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn create_activity<C>(
        db: &C,
        ctx: &SerializerContext,
        input: ActivityInput,
    ) -> Result<ActivityView>
    where
        C: ConnectionTrait,
    {
        let mut errors = field_errors(&input);
        check_unique_slug::<activity::Entity, _>(
            db,
            activity::Column::Slug,
            activity::Column::Id,
            &input.slug,
            None,
            &mut errors,
        )
        .await?;
        check_category(db, input.category, &mut errors).await?;
        errors.into_result()?;

        let model = input.into_active_model().insert(db).await?;
        info!(id = model.id, slug = %model.slug, "created activity");
        Ok(ActivityView::new(model, Vec::new(), Vec::new(), ctx))
    }

    #[instrument(level = "debug", skip(db, ctx, input))]
    pub async fn update_activity<C>(
        db: &C,
        ctx: &SerializerContext,
        id: i32,
        input: ActivityInput,
    ) -> Result<ActivityView>
    where
        C: ConnectionTrait,
    {
        activity::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| Error::not_found("activity", "id", id))?;

        let mut errors = field_errors(&input);
        check_unique_slug::<activity::Entity, _>(
            db,
            activity::Column::Slug,
            activity::Column::Id,
            &input.slug,
            Some(id),
            &mut errors,
        )
        .await?;
        check_category(db, input.category, &mut errors).await?;
        errors.into_result()?;

        let mut model = input.into_active_model();
        model.id = Unchanged(id);
        let model = model.update(db).await?;
        info!(id, "updated activity");

        let mut views = CatalogQuery::activity_views(db, ctx, vec![model]).await?;
        views.pop().ok_or_else(|| Error::not_found("activity", "id", id))
    }

    /// Replace the reasons of an activity, keeping the first occurrence of
    /// each id
    #[instrument(level = "debug", skip(db, ctx))]
    pub async fn set_activity_reasons<C>(
        db: &C,
        ctx: &SerializerContext,
        activity_id: i32,
        reason_ids: Vec<i32>,
    ) -> Result<ActivityView>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let activity = activity::Entity::find_by_id(activity_id)
            .one(db)
            .await?
            .ok_or_else(|| Error::not_found("activity", "id", activity_id))?;

        let mut ids = Vec::with_capacity(reason_ids.len());
        for id in reason_ids {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        let found = reason::Entity::find()
            .filter(reason::Column::Id.is_in(ids.clone()))
            .all(db)
            .await?;
        let mut errors = ValidationErrors::new();
        for id in &ids {
            if !found.iter().any(|reason| reason.id == *id) {
                errors.add(
                    "reasons",
                    format!("Invalid pk \"{id}\" - object does not exist."),
                );
            }
        }
        errors.into_result()?;

        let txn = db.begin().await?;
        activity_reason::Entity::delete_many()
            .filter(activity_reason::Column::ActivityId.eq(activity_id))
            .exec(&txn)
            .await?;
        if !ids.is_empty() {
            let links = ids.iter().map(|reason_id| activity_reason::ActiveModel {
                activity_id: sea_orm::Set(activity_id),
                reason_id: sea_orm::Set(*reason_id),
            });
            activity_reason::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }
        txn.commit().await?;
        info!(activity_id, reasons = ids.len(), "replaced activity reasons");

        let mut views = CatalogQuery::activity_views(db, ctx, vec![activity]).await?;
        views
            .pop()
            .ok_or_else(|| Error::not_found("activity", "id", activity_id))
    }

    #[instrument(level = "debug", skip(db, ctx, input))]
    pub async fn add_activity_image<C>(
        db: &C,
        ctx: &SerializerContext,
        activity_id: i32,
        input: ImageInput,
    ) -> Result<ActivityImageView>
    where
        C: ConnectionTrait,
    {
        activity::Entity::find_by_id(activity_id)
            .one(db)
            .await?
            .ok_or_else(|| Error::not_found("activity", "id", activity_id))?;
        input.validate()?;

        let model = input.into_activity_image(activity_id).insert(db).await?;
        info!(activity_id, id = model.id, "added activity image");
        Ok(ActivityImageView::new(model, ctx))
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn create_box<C>(
        db: &C,
        ctx: &SerializerContext,
        input: BoxInput,
    ) -> Result<BoxView>
    where
        C: ConnectionTrait,
    {
        let mut errors = field_errors(&input);
        check_unique_slug::<r#box::Entity, _>(
            db,
            r#box::Column::Slug,
            r#box::Column::Id,
            &input.slug,
            None,
            &mut errors,
        )
        .await?;
        check_category(db, input.category, &mut errors).await?;
        errors.into_result()?;

        let model = input.into_active_model().insert(db).await?;
        info!(id = model.id, slug = %model.slug, "created box");
        Ok(BoxView::new(model, Vec::new(), ctx))
    }

    #[instrument(level = "debug", skip(db, ctx, input))]
    pub async fn update_box_by_slug<C>(
        db: &C,
        ctx: &SerializerContext,
        slug: &str,
        input: BoxInput,
    ) -> Result<BoxView>
    where
        C: ConnectionTrait,
    {
        let existing = find_box(db, slug).await?;

        let mut errors = field_errors(&input);
        check_unique_slug::<r#box::Entity, _>(
            db,
            r#box::Column::Slug,
            r#box::Column::Id,
            &input.slug,
            Some(existing.id),
            &mut errors,
        )
        .await?;
        check_category(db, input.category, &mut errors).await?;
        errors.into_result()?;

        let mut model = input.into_active_model();
        model.id = Unchanged(existing.id);
        let model = model.update(db).await?;
        info!(id = model.id, slug = %model.slug, "updated box");

        let mut views = CatalogQuery::box_views(db, ctx, vec![model]).await?;
        views.pop().ok_or_else(|| Error::not_found("box", "slug", slug))
    }

    #[instrument(level = "debug", skip(db))]
    pub async fn delete_box_by_slug<C>(db: &C, slug: &str) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let model = find_box(db, slug).await?;
        let id = model.id;
        model.delete(db).await?;
        info!(id, slug, "deleted box");
        Ok(())
    }

    #[instrument(level = "debug", skip(db, ctx, input))]
    pub async fn add_box_image<C>(
        db: &C,
        ctx: &SerializerContext,
        slug: &str,
        input: ImageInput,
    ) -> Result<BoxImageView>
    where
        C: ConnectionTrait,
    {
        let parent = find_box(db, slug).await?;
        input.validate()?;

        let model = input.into_box_image(parent.id).insert(db).await?;
        info!(box_id = parent.id, id = model.id, "added box image");
        Ok(BoxImageView::new(model, ctx))
    }
}

fn field_errors<I: Input>(input: &I) -> ValidationErrors {
    input.validate().err().unwrap_or_default()
}

async fn find_box<C>(db: &C, slug: &str) -> Result<r#box::Model>
where
    C: ConnectionTrait,
{
    r#box::Entity::find()
        .filter(r#box::Column::Slug.eq(slug))
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("box", "slug", slug))
}

/// Reports `slug` as taken when another row already uses it. Skipped when
/// the slug itself is invalid.
async fn check_unique_slug<E, C>(
    db: &C,
    slug_column: E::Column,
    id_column: E::Column,
    slug: &str,
    exclude_id: Option<i32>,
    errors: &mut ValidationErrors,
) -> Result<()>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    if errors.get("slug").is_some() {
        return Ok(());
    }

    let mut query = E::find().filter(slug_column.eq(slug.trim()));
    if let Some(id) = exclude_id {
        query = query.filter(id_column.ne(id));
    }
    if query.one(db).await?.is_some() {
        errors.add(
            "slug",
            format!("{} with this slug already exists.", E::default().table_name()),
        );
    }
    Ok(())
}

async fn check_category<C>(
    db: &C,
    category: Option<i32>,
    errors: &mut ValidationErrors,
) -> Result<()>
where
    C: ConnectionTrait,
{
    let Some(id) = category else {
        return Ok(());
    };
    if category::Entity::find_by_id(id).one(db).await?.is_none() {
        errors.add(
            "category",
            format!("Invalid pk \"{id}\" - object does not exist."),
        );
    }
    Ok(())
}
