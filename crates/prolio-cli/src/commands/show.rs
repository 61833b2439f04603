use anyhow::Context;
use prolio_core::checklist::ChecklistTemplate;
use prolio_core::enums::EntityKind;
use prolio_core::responses::EntityDetailResponse;

use crate::cli::{GlobalFlags, ShowArgs};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;

/// Handle `prolio show`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_enum::<EntityKind>(&args.kind, "kind")?;

    let spinner = Spinner::start(format!("loading {kind} {}", args.id));
    let result = ctx.api.fetch(kind, &args.id).await;
    spinner.stop();
    let entity = result.with_context(|| format!("failed to load {kind} '{}'", args.id))?;

    let checklist = ChecklistTemplate::for_kind(kind).build(&entity);
    output(&EntityDetailResponse { entity, checklist }, flags.format)
}
