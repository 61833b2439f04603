use anyhow::Context;
use prolio_core::entities::Entity;
use prolio_core::enums::{EntityKind, EntityStatus};
use prolio_core::filter::{EntityFilter, format_optional_date};
use serde::Serialize;

use crate::cli::{GlobalFlags, ListArgs};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Debug, Serialize)]
struct EntityRow {
    id: String,
    name: String,
    status: EntityStatus,
    created: String,
    documents: usize,
}

impl From<Entity> for EntityRow {
    fn from(entity: Entity) -> Self {
        Self {
            created: format_optional_date(entity.created_at),
            documents: entity.documents.len(),
            id: entity.id,
            name: entity.name,
            status: entity.status,
        }
    }
}

fn build_filter(status: Option<&str>, search: Option<&str>) -> anyhow::Result<EntityFilter> {
    let mut filter = EntityFilter::default();
    if let Some(status) = status {
        filter = filter.with_status(parse_enum::<EntityStatus>(status, "status")?);
    }
    if let Some(search) = search {
        filter = filter.with_search(search);
    }
    Ok(filter)
}

/// Handle `prolio list`.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_enum::<EntityKind>(&args.kind, "kind")?;
    let filter = build_filter(args.status.as_deref(), args.search.as_deref())?;
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);

    let spinner = Spinner::start(format!("loading {}", kind.collection()));
    let result = ctx.api.list(kind, &filter).await;
    spinner.stop();
    let entities = result.with_context(|| format!("failed to list {}", kind.collection()))?;

    let rows = filter
        .apply(&entities)
        .into_iter()
        .take(usize::try_from(limit)?)
        .map(EntityRow::from)
        .collect::<Vec<_>>();

    output(&rows, flags.format)
}
