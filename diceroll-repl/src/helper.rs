use colored::Colorize;
use diceroll_lib::options::Mode;
use diceroll_lib::options::Options;
use diceroll_lib::solver::Solver;
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::Context;
use rustyline::Result;
use rustyline_derive::Helper;
use rustyline_derive::Hinter;
use rustyline_derive::Validator;
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;

const COMMANDS: [&str; 4] = ["/start", "/help", "/roll", "/quit"];
const ROLL_COMMANDS: [&str; 2] = ["/roll", "/r"];

#[derive(Helper, Hinter, Validator)]
pub(crate) struct ReplHelper {
    #[rustyline(Hinter)]
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored: String,
    pub(crate) options: Options,
}

/// Byte range of the expression a roll line would use
fn expression_span(line: &str) -> Option<(usize, usize)> {
    let mut start = line.len() - line.trim_start().len();
    if line[start..].starts_with('/') {
        let command_end = start + line[start..].find(char::is_whitespace)?;
        if !ROLL_COMMANDS.contains(&&line[start..command_end]) {
            return None;
        }
        start = line.len() - line[command_end..].trim_start().len();
    }
    let end = line[start..]
        .find(char::is_whitespace)
        .map_or(line.len(), |n| start + n);
    (start < end).then_some((start, end))
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>)> {
        let word = &line[..pos];
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|command| command.starts_with(word))
            .map(|command| Pair {
                display: command.to_string(),
                replacement: format!("{command} "),
            })
            .collect();
        Ok((0, candidates))
    }
}

// Shows what the parser would skip: dimmed when lenient, red when it would be rejected
impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let Some((start, end)) = expression_span(line) else {
            return Borrowed(line);
        };
        let lenient = Options {
            mode: Mode::Lenient,
            ..self.options
        };
        let parsed = match Solver::with_options(&line[start..end], lenient).parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                return Owned(format!(
                    "{}{}{}",
                    &line[..start],
                    line[start..end].red(),
                    &line[end..]
                ))
            }
        };
        let trailing = !line[end..].trim().is_empty();
        if !parsed.has_ignored() && !trailing {
            return Borrowed(line);
        }
        let mut out = String::with_capacity(line.len());
        out.push_str(&line[..start]);
        let mut cursor = start;
        for fragment in parsed.ignored() {
            let offset = start + fragment.offset;
            out.push_str(&line[cursor..offset]);
            let text = match self.options.mode {
                Mode::Strict => fragment.text.as_str().red(),
                Mode::Lenient => fragment.text.as_str().dimmed(),
            };
            out.push_str(&text.to_string());
            cursor = offset + fragment.text.len();
        }
        out.push_str(&line[cursor..end]);
        if trailing {
            out.push_str(&line[end..].dimmed().to_string());
        } else {
            out.push_str(&line[end..]);
        }
        Owned(out)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize) -> bool {
        true
    }
}
