mod cli;
mod handler;
mod helper;
mod messages;

use cli::Args;
use cli::Parser;
use colored::Colorize;
use handler::Handler;
use handler::Reply;
use helper::ReplHelper;
use messages::Messages;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use std::fs::File;
use std::path::Path;
use std::process;
use std::sync::Mutex;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::info;
use tracing::warn;
use tracing::Level;
use tracing_unwrap::OptionExt;

fn init_logging(args: &Args) -> std::io::Result<()> {
    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level);
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init()
        }
        None => builder.with_ansi(true).with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Err(error) = init_logging(&args) {
        let path = args.log_file.as_deref().unwrap_or(Path::new(""));
        eprintln!(
            "{}",
            format!("repl: error: log file `{}`: {}", path.display(), error)
                .bold()
                .red()
        );
        process::exit(1);
    }

    let mut handler = Handler::new(
        Messages::load(&args.messages),
        args.options(),
        args.player.clone(),
    );
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        colored: "".to_owned(),
        options: args.options(),
    };
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.italic.set_fg(Color::Red);
    skin.inline_code.set_fg(Color::Magenta);
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(&args.history).is_err() {
        warn!("No previous history in `{}`", args.history.display());
    }
    if let Reply::Text(text) = handler.handle("/start") {
        println!("{}", skin.term_text(&text));
    }
    let mut count = 1u64;
    loop {
        let prompt = format!("roll: {}> ", count);
        rline.helper_mut().expect_or_log("repl: no helper").colored =
            prompt.bold().green().to_string();
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                if line.trim().is_empty() {
                    continue;
                }
                match handler.handle(&line) {
                    Reply::Text(text) => println!("{}", skin.term_text(&text)),
                    Reply::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                info!("signal: CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                info!("signal: CTRL-D");
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("repl: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(&args.history)
}
