//! hembed - Embed headings of one Markdown note into another

use anyhow::{Context, Result};
use clap::Parser;
use hembed_core::{
    Config, Cursor, EmbedRequest, Embedder, Notice, NoteFile, StdoutSink, TargetDocument,
    TextSink, Vault,
};
use hembed_tui::heading_dialog::HeadingDialog;
use hembed_tui::App;
use std::path::PathBuf;
use std::process::ExitCode;

/// Pick a note, select its headings and insert `![[note#heading]]` embeds
#[derive(Parser, Debug)]
#[command(name = "hembed")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the notes to pick from
    #[arg(long, value_name = "DIR", default_value = ".")]
    vault: PathBuf,

    /// Markdown document to insert the embeds into
    #[arg(long, value_name = "FILE")]
    into: Option<PathBuf>,

    /// Insert before this line of the document (1-based, default: append)
    #[arg(long, value_name = "N", requires = "into")]
    line: Option<usize>,

    /// Print the embeds to stdout instead of editing a document
    #[arg(long, conflicts_with = "into")]
    stdout: bool,

    /// Copy the embeds to the clipboard instead of editing a document
    #[cfg(feature = "clipboard")]
    #[arg(long, conflicts_with_all = ["into", "stdout"])]
    clipboard: bool,

    /// Note to take headings from, skipping the picker
    #[arg(long, value_name = "FILE")]
    note: Option<PathBuf>,

    /// Select all top-level headings of --note without the TUI
    #[arg(long, requires = "note")]
    top: bool,

    /// Select a heading of --note by its text without the TUI (repeatable)
    #[arg(long = "heading", value_name = "TEXT", requires = "note", conflicts_with = "top")]
    headings: Vec<String>,

    /// Print the headings of --note and exit
    #[arg(long, requires = "note")]
    list: bool,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    fn cursor(&self) -> Cursor {
        match self.line {
            Some(n) => Cursor::Line(n.saturating_sub(1)),
            None => Cursor::End,
        }
    }

    fn headless(&self) -> bool {
        self.top || !self.headings.is_empty()
    }
}

/// Where the embeds end up
enum Sink {
    Document(TargetDocument),
    Stdout(StdoutSink),
    #[cfg(feature = "clipboard")]
    Clipboard(hembed_core::ClipboardSink),
}

impl Sink {
    /// Resolve the output from the arguments. A missing or unusable
    /// document is reported as `NoActiveDocument` by the embedder.
    fn open(args: &Args) -> Result<Option<Self>> {
        if args.stdout {
            return Ok(Some(Sink::Stdout(StdoutSink)));
        }

        #[cfg(feature = "clipboard")]
        if args.clipboard {
            return Ok(Some(Sink::Clipboard(hembed_core::ClipboardSink::new()?)));
        }

        let Some(path) = &args.into else {
            return Ok(None);
        };

        match TargetDocument::open(path, args.cursor()) {
            Ok(doc) => Ok(Some(Sink::Document(doc))),
            Err(err) if err.downcast_ref::<hembed_core::EmbedError>().is_some() => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn as_text_sink(&mut self) -> &mut dyn TextSink {
        match self {
            Sink::Document(doc) => doc,
            Sink::Stdout(out) => out,
            #[cfg(feature = "clipboard")]
            Sink::Clipboard(clip) => clip,
        }
    }

    fn finish(&mut self) -> Result<()> {
        if let Sink::Document(doc) = self {
            doc.save()?;
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let notice = Notice::from_error(&err, "hembed");
            eprintln!("hembed: {notice}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let vault = Vault::open(&args.vault, config.vault.clone())?;
    let embedder = Embedder::new(vault.clone());

    let request = match &args.note {
        Some(path) => {
            let note = vault.note_for(path)?;
            if args.list {
                return list_headings(&embedder, &note);
            }
            if args.headless() {
                select_headless(&embedder, &args, note)?
            } else {
                let selector = embedder.select(&note)?;
                let mut app = App::new(config, vault, args.into.clone())?;
                app.dialog = Some(HeadingDialog::new(note, selector));
                hembed_tui::run(app).context("TUI application error")?
            }
        }
        None => {
            let app = App::new(config, vault, args.into.clone())?;
            hembed_tui::run(app).context("TUI application error")?
        }
    };

    let Some(request) = request else {
        log::info!("quit without selection");
        return Ok(());
    };

    insert(&embedder, &args, &request)
}

fn list_headings(embedder: &Embedder<Vault>, note: &NoteFile) -> Result<()> {
    for heading in embedder.load_headings(note)? {
        let marker = if heading.top { "*" } else { " " };
        println!(
            "{marker} {:>4}  {} {}",
            heading.line + 1,
            "#".repeat(usize::from(heading.level)),
            heading.text
        );
    }
    Ok(())
}

fn select_headless(
    embedder: &Embedder<Vault>,
    args: &Args,
    note: NoteFile,
) -> Result<Option<EmbedRequest>> {
    let mut selector = embedder.select(&note)?;

    if args.top {
        selector.select_all_top_level();
    }
    for text in &args.headings {
        let index = selector
            .find(text)
            .with_context(|| format!("No heading named {text:?} in {}", note.display_path()))?;
        if selector.state().is_disabled(index) {
            log::warn!("heading {text:?} is nested under a selected heading, skipping");
            continue;
        }
        if !selector.state().is_selected(index) {
            selector.toggle(index);
        }
    }

    Ok(Some(EmbedRequest::from_selector(note, selector)))
}

fn insert(embedder: &Embedder<Vault>, args: &Args, request: &EmbedRequest) -> Result<()> {
    let mut sink = Sink::open(args)?;
    let count = embedder.insert(sink.as_mut().map(Sink::as_text_sink), request)?;

    if let Some(sink) = sink.as_mut() {
        sink.finish()?;
    }
    if !args.stdout {
        eprintln!(
            "hembed: inserted {count} embed(s) from {}",
            request.note.display_path()
        );
    }
    Ok(())
}
