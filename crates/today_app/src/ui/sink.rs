use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{style, Color, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

/// Semantic color of a drawn span; the sink picks the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Border,
    Date,
    Temperature,
    Condition,
    Low,
    High,
    Error,
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Text {
        col: u16,
        row: u16,
        content: String,
        tone: Tone,
    },
}

impl DrawCommand {
    pub fn text(col: u16, row: u16, content: impl Into<String>, tone: Tone) -> Self {
        DrawCommand::Text {
            col,
            row,
            content: content.into(),
            tone,
        }
    }

    #[cfg(test)]
    pub fn row(&self) -> u16 {
        match self {
            DrawCommand::Text { row, .. } => *row,
        }
    }

    #[cfg(test)]
    pub fn content(&self) -> &str {
        match self {
            DrawCommand::Text { content, .. } => content,
        }
    }
}

pub trait RenderSink {
    /// Replaces whatever was shown before with `commands`.
    fn present(&mut self, commands: &[DrawCommand]) -> io::Result<()>;
}

/// Draws onto the alternate screen; restores the terminal on drop.
pub struct TerminalSink {
    out: Stdout,
}

impl TerminalSink {
    pub fn open() -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self { out })
    }
}

impl RenderSink for TerminalSink {
    fn present(&mut self, commands: &[DrawCommand]) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for command in commands {
            match command {
                DrawCommand::Text {
                    col,
                    row,
                    content,
                    tone,
                } => {
                    let styled = style(content.as_str()).with(color_of(*tone));
                    queue!(self.out, MoveTo(*col, *row), PrintStyledContent(styled))?;
                }
            }
        }
        self.out.flush()
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
    }
}

fn color_of(tone: Tone) -> Color {
    match tone {
        Tone::Plain => Color::Reset,
        Tone::Border => Color::DarkGrey,
        Tone::Date | Tone::Low => Color::Blue,
        Tone::Temperature => Color::Yellow,
        Tone::Condition => Color::Green,
        Tone::High | Tone::Error => Color::Red,
        Tone::Rgb { r, g, b } => Color::Rgb { r, g, b },
    }
}
