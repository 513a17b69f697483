use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use scriptio::kernel::services::adapters::{
    get_store_path, load_settings, AsyncRuntime, FileStore, MemoryStore, RopeSurface,
};
use scriptio::kernel::services::ports::{EditingSurface, KeyValueStore};
use scriptio::kernel::session::Result as SessionResult;
use scriptio::kernel::{EditorSession, LanguageId};

mod logging;

const USAGE: &str = "usage: scriptio <lang> <source-file> [--offset=N] [--cache] < error.txt";

fn main() -> io::Result<()> {
    let log_guard = logging::init();
    if let Some(guard) = &log_guard {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    let mut positional = Vec::new();
    let mut line_offset: i64 = 0;
    let mut use_cache = false;
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--offset=") {
            line_offset = value.parse().unwrap_or(line_offset);
        } else if arg == "--cache" {
            use_cache = true;
        } else {
            positional.push(arg);
        }
    }

    let [lang, source] = positional.as_slice() else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    let Some(lang) = LanguageId::from_name(lang) else {
        eprintln!("unknown language: {lang}");
        std::process::exit(2);
    };
    let code = std::fs::read_to_string(PathBuf::from(source))?;
    let mut error = String::new();
    io::stdin().read_to_string(&mut error)?;

    let settings = load_settings().unwrap_or_default();
    let registry = settings
        .build_registry()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let store: Arc<dyn KeyValueStore> = match (use_cache, get_store_path()) {
        (true, Some(path)) => Arc::new(
            FileStore::open(path).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?,
        ),
        _ => Arc::new(MemoryStore::new()),
    };

    let runtime = AsyncRuntime::new()?;
    let mut session = EditorSession::new(settings, Arc::new(registry), store, runtime.handle());
    open_session(&mut session, lang, &code)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    session.process_error(&error, line_offset);

    let Some(surface) = session.surface() else {
        return Ok(());
    };
    match surface.diagnostics().first() {
        Some(diagnostic) => {
            let line = surface.rope().char_to_line(diagnostic.from) + 1;
            let summary = diagnostic.message.lines().last().unwrap_or_default();
            println!(
                "{}:{}-{}: {}: {}",
                line,
                diagnostic.from,
                diagnostic.to,
                diagnostic.severity.label(),
                summary.trim()
            );
        }
        None => println!("no diagnostic"),
    }
    Ok(())
}

fn open_session(
    session: &mut EditorSession<RopeSurface>,
    lang: LanguageId,
    code: &str,
) -> SessionResult<()> {
    session.link(RopeSurface::new(), |ability| {
        tracing::info!(ability, "ability keyword in source");
    })?;
    session.set_lang(lang)?;
    session.set_code(code)
}
