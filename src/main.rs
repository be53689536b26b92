// SPDX-License-Identifier: MPL-2.0
use d7me_prefs::document::DocumentAdapter;
use d7me_prefs::i18n::Localizer;
use d7me_prefs::page;
use d7me_prefs::storage::{FileStore, MemoryStore, PreferenceStore};
use d7me_prefs::PreferenceController;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
d7me-prefs - render the D7ME landing page with saved preferences

USAGE:
  d7me-prefs [OPTIONS]

OPTIONS:
  --theme <NAME>        Switch theme (dark, light, ...)
  --lang <CODE>         Switch language (ar, en)
  --config-dir <DIR>    Directory holding settings.toml
  --ephemeral           Keep preferences in memory only
  -h, --help            Print help
";

struct Flags {
    theme: Option<String>,
    lang: Option<String>,
    config_dir: Option<PathBuf>,
    ephemeral: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let flags = Flags {
        theme: args.opt_value_from_str("--theme")?,
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        ephemeral: args.contains("--ephemeral"),
    };
    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {:?}", remaining).into());
    }

    let store: Box<dyn PreferenceStore> = if flags.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        let store = FileStore::with_override(flags.config_dir)?;
        tracing::info!(path = %store.path().display(), "using settings file");
        Box::new(store)
    };

    let mut controller =
        PreferenceController::new(page::landing_page(), store, Localizer::embedded()?);
    controller.load_persisted_settings();

    if let Some(theme) = flags.theme {
        controller.set_theme(theme);
    }
    if let Some(lang) = flags.lang {
        controller.set_language(&lang);
    }

    let doc = controller.document();
    for (name, value) in doc.root_attributes() {
        println!("{name} = {value}");
    }
    println!("title = {}", doc.title());
    for element in doc.translatable_elements() {
        println!("  {}", doc.text(element));
    }

    Ok(())
}
