//! Show command: print the mirrored tree

use std::path::Path;

use anyhow::Result;

use menu_mirror::{ProxyMenu, TreeRenderer};

use super::{load_source, Context};

pub fn cmd_show(file: &Path, ctx: &Context) -> Result<()> {
    let sink = ctx.json_sink("show");
    let source = load_source(file, ctx, sink.as_ref())?;
    let target = ProxyMenu::new(source.title());

    ctx.cloner(sink.as_ref()).clone_menu(&source, &target)?;

    match sink {
        Some(sink) => sink.write_event(serde_json::json!({
            "event": "tree",
            "command": "show",
            "title": target.title(),
            "items": target.shape(),
        })),
        None => print!("{}", TreeRenderer::new(ctx.unicode()).render(&target)),
    }

    Ok(())
}
