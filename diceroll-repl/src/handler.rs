use crate::messages::render;
use crate::messages::Messages;
use diceroll_lib::dice::Critic;
use diceroll_lib::error::Error;
use diceroll_lib::options::Options;
use diceroll_lib::roll;
use diceroll_lib::roll::Source;
use diceroll_lib::seed;
use diceroll_lib::solver::RandomSource;
use diceroll_lib::solver::Solver;
use itertools::Itertools;
use std::borrow::Cow;
use tracing::debug;
use tracing::error;
use tracing::info;

const COMMAND_SIGIL: char = '/';
const DEFAULT_EXPRESSION: &str = "1d20";

/// Parsed input line
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Start,
    Help,
    Roll(Option<&'a str>),
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub(crate) fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(COMMAND_SIGIL) else {
            return Command::Roll(line.split_whitespace().next());
        };
        let mut args = rest.split_whitespace();
        match args.next().unwrap_or_default() {
            "start" => Command::Start,
            "help" => Command::Help,
            "roll" | "r" => Command::Roll(args.next()),
            "quit" | "q" => Command::Quit,
            other => Command::Unknown(other),
        }
    }
}

/// Answer to one input line
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Reply {
    Text(String),
    Quit,
}

/// Turns input lines into replies, one request at a time
pub(crate) struct Handler {
    messages: Messages,
    options: Options,
    player: String,
    requests: u64,
}

impl Handler {
    pub(crate) fn new(messages: Messages, options: Options, player: String) -> Self {
        Handler {
            messages,
            options,
            player,
            requests: 0,
        }
    }

    pub(crate) fn handle(&mut self, line: &str) -> Reply {
        self.requests += 1;
        match Command::parse(line) {
            Command::Start => Reply::Text(self.messages.start.clone()),
            Command::Help => Reply::Text(self.messages.help.clone()),
            Command::Roll(expr) => {
                let mut generator = seed::generator(&(self.player.as_str(), self.requests));
                Reply::Text(self.roll(expr, &mut RandomSource { generator: &mut generator }))
            }
            Command::Quit => Reply::Quit,
            Command::Unknown(command) => {
                debug!("Unknown command `{}`", command);
                Reply::Text(self.messages.help.clone())
            }
        }
    }

    pub(crate) fn roll<S: Source>(&self, expr: Option<&str>, source: &mut S) -> String {
        let expr = expr.unwrap_or(DEFAULT_EXPRESSION);
        let solver = Solver::with_options(expr, self.options);
        match solver.solve_with_source(source) {
            Ok(result) => {
                info!(
                    "`{}` rolled `{}` for request {}: [{}]",
                    self.player,
                    expr,
                    self.requests,
                    result.values().format(", ")
                );
                self.format_result(expr, &result)
            }
            Err(err @ (Error::Empty | Error::Malformed { .. })) => {
                debug!("Invalid expression `{}`: {}", expr, err);
                self.messages.invalid_format.clone()
            }
            Err(err @ Error::Range { .. }) => {
                debug!("Rejected expression `{}`: {}", expr, err);
                render(&self.messages.out_of_range, &[("reason", err.to_string().as_str())])
            }
            Err(err) => {
                error!("{}: {}", self.messages.log_error, err);
                self.messages.error.clone()
            }
        }
    }

    fn format_result(&self, expr: &str, result: &roll::Result) -> String {
        // maximum faces in bold, natural ones in italic
        let results_str = result
            .get_rolls()
            .iter()
            .map(|r| match r.critic {
                Critic::Max => format!("**{}**", r.value),
                Critic::Min => format!("*{}*", r.value),
                Critic::Not => r.value.to_string(),
            })
            .format(", ")
            .to_string();
        let modifier = result.get_modifier();
        let modifier_str = match modifier {
            0 => Cow::Borrowed(""),
            m if m > 0 => Cow::Owned(format!(" + {m}")),
            m => Cow::Owned(format!(" - {}", m.unsigned_abs())),
        };
        render(
            &self.messages.roll_result,
            &[
                ("dice_expression", expr),
                ("results_str", results_str.as_str()),
                ("modifier_str", &*modifier_str),
                ("total", result.get_total().to_string().as_str()),
            ],
        )
    }
}
