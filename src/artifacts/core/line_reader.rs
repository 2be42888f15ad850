//! Line-oriented prompts
//!
//! Rebase asks one question per commit and reads one line back. The source of
//! those lines is injected so that tests can script the answers.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub trait LineReader {
    /// Show `prompt` and return the next line without its line terminator
    ///
    /// End of input reads as an empty line.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String>;
}

/// Prompts on stderr and reads from stdin
#[derive(Debug, Default)]
pub struct StdinLineReader;

impl LineReader for StdinLineReader {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        let mut stderr = std::io::stderr();
        write!(stderr, "{prompt}")?;
        stderr.flush()?;

        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Answers prompts from a fixed list of lines
#[derive(Debug, Default)]
pub struct ScriptedLineReader {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedLineReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedLineReader {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineReader for ScriptedLineReader {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().unwrap_or_default())
    }
}
