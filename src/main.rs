mod cli;
mod config;
mod controller;
mod document;
mod movement;
mod terminal;
mod view;

use clap::Parser;
use cli::{Cli, WrapMode};
use config::RcLoader;
use controller::EditorController;
use document::Document;
use terminal::{CrosstermTerminal, Terminal};
use view::View;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Flag validation happens here, before the terminal is touched; clap
    // exits non-zero on a missing filename or a bad wrap value.
    let cli = Cli::parse();
    let rc = RcLoader::load_config();
    let wrap = cli.wrap.or(rc.wrap).unwrap_or(WrapMode::Scroll);

    let document = Document::open(cli.file, cli.truncate);

    let mut term = CrosstermTerminal::new()?;
    let (rows, _) = term.size();
    if rows <= 3 {
        drop(term);
        return Err("window is too small to display the content".into());
    }

    let view = View::new(wrap, rc.tab_stop);
    let mut editor = EditorController::new(
        document,
        view,
        cli.read_only,
        rows.saturating_sub(2) as usize,
    );
    editor.run(&mut term)?;
    Ok(())
}
