use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
use diceroll_lib::options::Limits;
use diceroll_lib::options::Options;
pub use clap::Parser;
use std::path::PathBuf;

const DICEROLL_AUTHOR: &str = crate_authors!();
const DICEROLL_VERSION: &str = crate_version!();
const DICEROLL_ABOUT: &str = crate_description!();
const DICEROLL_FLAG_D_SHORT: char = 'd';
const DICEROLL_FLAG_D_HELP: &str = "Enable Debug logging";
const DICEROLL_FLAG_S_SHORT: char = 's';
const DICEROLL_FLAG_S_HELP: &str = "Reject expressions holding unrecognized text";
const DICEROLL_MESSAGES_HELP: &str = "Message catalog (RON)";
const DICEROLL_LOG_FILE_HELP: &str = "Write logs to this file instead of stderr";
const DICEROLL_HISTORY_HELP: &str = "Line history file";
const DICEROLL_PLAYER_HELP: &str = "Name mixed into every roll seed";

#[derive(Parser, Debug)]
#[command(author = DICEROLL_AUTHOR, version = DICEROLL_VERSION, about = DICEROLL_ABOUT)]
pub struct Args {
    #[arg(short = DICEROLL_FLAG_D_SHORT, long, help = DICEROLL_FLAG_D_HELP, action)]
    pub debug: bool,

    #[arg(short = DICEROLL_FLAG_S_SHORT, long, help = DICEROLL_FLAG_S_HELP, action)]
    pub strict: bool,

    #[arg(long, default_value_t = Limits::MAX_DICE_AMOUNT)]
    pub max_dice: u64,

    #[arg(long, default_value_t = Limits::MAX_DICE_SIDES)]
    pub max_sides: u64,

    #[arg(long, default_value = "messages.ron", help = DICEROLL_MESSAGES_HELP)]
    pub messages: PathBuf,

    #[arg(long, help = DICEROLL_LOG_FILE_HELP)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "history", help = DICEROLL_HISTORY_HELP)]
    pub history: PathBuf,

    #[arg(long, default_value = "repl", help = DICEROLL_PLAYER_HELP)]
    pub player: String,
}

impl Args {
    pub fn options(&self) -> Options {
        let options = if self.strict {
            Options::strict()
        } else {
            Options::default()
        };
        options.with_limits(Limits {
            max_amount: self.max_dice,
            max_sides: self.max_sides,
        })
    }
}
