//! Check command: mirror and summarise

use std::path::Path;

use anyhow::Result;

use menu_mirror::presentation::{render_error, render_summary};
use menu_mirror::{MirrorError, ProxyMenu};

use super::{load_source, Context};

pub fn cmd_check(file: &Path, ctx: &Context) -> Result<()> {
    let sink = ctx.json_sink("check");
    let source = load_source(file, ctx, sink.as_ref())?;
    let target = ProxyMenu::new(source.title());

    match ctx.cloner(sink.as_ref()).clone_menu(&source, &target) {
        Ok(summary) => {
            if !ctx.json {
                print!("{}", render_summary(&source.title(), &summary, ctx.unicode()));
            }
            Ok(())
        }
        Err(MirrorError::Structural(err)) => {
            // The JSON sink has already reported the failure
            if !ctx.json {
                eprint!("{}", render_error(&err.to_string(), ctx.unicode()));
            }
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
