//! Command implementations

mod check;
mod show;

use std::path::Path;
use std::rc::Rc;

use anyhow::{Context as _, Result};

use menu_mirror::config::{ConfigWarning, MirrorConfig};
use menu_mirror::infrastructure::{DocumentWarning, JsonEventSink, MenuDocument};
use menu_mirror::presentation::render_warning;
use menu_mirror::{MenuCloner, SubMenu};

pub use check::cmd_check;
pub use show::cmd_show;

/// Settings shared by every command
pub struct Context {
    pub config: MirrorConfig,
    pub config_warnings: Vec<ConfigWarning>,
    pub json: bool,
}

impl Context {
    fn unicode(&self) -> bool {
        !self.config.output.ascii
    }

    /// NDJSON sink for `command`, when running with `--json`
    fn json_sink(&self, command: &'static str) -> Option<Rc<JsonEventSink>> {
        self.json.then(|| Rc::new(JsonEventSink::stdout(command)))
    }

    fn cloner(&self, sink: Option<&Rc<JsonEventSink>>) -> MenuCloner {
        let cloner = self.config.cloner();
        match sink {
            Some(sink) => cloner.with_event_sink(sink.clone()),
            None => cloner,
        }
    }

    /// Surface non-fatal warnings on stderr, or as events in JSON mode
    fn warn(&self, sink: Option<&Rc<JsonEventSink>>, message: &str) {
        match sink {
            Some(sink) => sink.warning(message),
            None => eprint!("{}", render_warning(message, self.unicode())),
        }
    }
}

/// Load a menu description and build its source tree, reporting warnings
fn load_source(file: &Path, ctx: &Context, sink: Option<&Rc<JsonEventSink>>) -> Result<SubMenu> {
    for warning in &ctx.config_warnings {
        ctx.warn(sink, &describe_config_warning(warning));
    }

    let (document, warnings) = MenuDocument::load(file)
        .with_context(|| format!("failed to load menu document {}", file.display()))?;
    for warning in &warnings {
        ctx.warn(sink, &describe_document_warning(warning));
    }

    Ok(document.build())
}

fn describe_config_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => format!(
            "unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => format!("unknown config key '{}' in {}", warning.key, location),
    }
}

fn describe_document_warning(warning: &DocumentWarning) -> String {
    format!(
        "unknown key '{}' in {}",
        warning.path,
        warning.file.display()
    )
}
