use std::io::{self, Write};

use slovar_config::ui::UiConfig;
use slovar_types::{DictionaryMetadata, WordListView};

use crate::command::HELP;

/// Line based renderer for the word list and its popups
pub struct Terminal<W: Write> {
    out: W,
    config: UiConfig,
    /// Print an input prompt after each redraw
    interactive: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, config: UiConfig, interactive: bool) -> Self {
        Self {
            out,
            config,
            interactive,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, metadata: &DictionaryMetadata) -> io::Result<()> {
        writeln!(
            self.out,
            "{} ({}): {}",
            metadata.source, metadata.entry_count, self.config.search_hint
        )?;
        writeln!(self.out, "{}", self.config.placeholder)?;
        self.prompt()
    }

    pub fn word_list(&mut self, view: &WordListView) -> io::Result<()> {
        if view.has_results {
            for (idx, word) in view.words.iter().enumerate() {
                writeln!(self.out, "{:>4}. {word}", idx + 1)?;
            }
        } else {
            writeln!(self.out, "{}", self.config.placeholder)?;
        }
        self.prompt()
    }

    /// Titled block standing in for a modal popup
    pub fn popup(&mut self, title: &str, body: &str) -> io::Result<()> {
        writeln!(self.out, "── {title} ──")?;
        for line in body.lines() {
            writeln!(self.out, "  {line}")?;
        }
        writeln!(self.out)?;
        self.prompt()
    }

    pub fn letter_picker(&mut self) -> io::Result<()> {
        let letters = self.config.letters().collect::<Vec<_>>().join(" ");
        let body = format!("{}\n{letters}", self.config.filter_prompt);
        let title = self.config.filter_title.clone();
        self.popup(&title, &body)
    }

    pub fn help(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HELP}")?;
        self.prompt()
    }

    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.prompt()
    }

    fn prompt(&mut self) -> io::Result<()> {
        if self.interactive {
            write!(self.out, "> ")?;
        }
        self.out.flush()
    }
}
