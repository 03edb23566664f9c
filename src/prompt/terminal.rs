use std::io::{self, BufRead, Stderr, Write};

use crossterm::{
    cursor::MoveToPreviousLine,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, DisableLineWrap,
        EnableLineWrap,
    },
};

use crate::prompt::{PromptError, PromptResult, Prompter};

/// Rows kept free below a list for the prompt line and cursor.
const RESERVED_ROWS: usize = 3;

/// Prompts on stderr, reading stdin. Lists are drawn in raw mode and navigated
/// with the arrow keys; Space checks an entry in a multi-select, Enter accepts
/// and Ctrl+C interrupts. Only `output` writes to stdout.
pub struct TerminalPrompter {
    out: Stderr,
}

/// Raw mode without line wrapping, so every list entry takes exactly one row
/// however wide it is.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stderr(), DisableLineWrap)?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), EnableLineWrap);
        let _ = disable_raw_mode();
    }
}

enum ListKey {
    Up,
    Down,
    Toggle,
    Accept,
    Interrupt,
    Other,
}

/// Cursor position in a list that wraps around at both ends.
fn step_cursor(cursor: usize, len: usize, down: bool) -> usize {
    match (down, len) {
        (_, 0) => 0,
        (true, _) if cursor + 1 >= len => 0,
        (true, _) => cursor + 1,
        (false, _) => cursor.checked_sub(1).unwrap_or(len - 1),
    }
}

/// First visible entry so that `cursor` stays inside a viewport of `visible` rows.
fn scroll_offset(cursor: usize, offset: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if cursor < offset {
        cursor
    } else if cursor >= offset + visible {
        cursor + 1 - visible
    } else {
        offset
    }
}

/// Number of list entries that fit on screen next to the header and prompt.
fn viewport_rows(terminal_rows: usize, has_header: bool, len: usize) -> usize {
    let free = terminal_rows.saturating_sub(RESERVED_ROWS + usize::from(has_header));
    len.min(free.max(1))
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self { out: io::stderr() }
    }

    fn read_list_key(&self) -> io::Result<ListKey> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        ListKey::Interrupt
                    }
                    KeyCode::Up | KeyCode::Char('k') => ListKey::Up,
                    KeyCode::Down | KeyCode::Char('j') => ListKey::Down,
                    KeyCode::Char(' ') => ListKey::Toggle,
                    KeyCode::Enter => ListKey::Accept,
                    _ => ListKey::Other,
                });
            }
        }
    }

    /// Draws the visible part of the list and returns the number of rows written.
    fn draw_list(
        &mut self,
        header: Option<&str>,
        choices: &[String],
        cursor: usize,
        checked: Option<&[bool]>,
        offset: usize,
        visible: usize,
    ) -> io::Result<u16> {
        let mut lines = 0u16;
        if let Some(header) = header {
            queue!(self.out, Clear(ClearType::CurrentLine), Print(header), Print("\r\n"))?;
            lines += 1;
        }
        for (i, choice) in choices.iter().enumerate().skip(offset).take(visible) {
            let pointer = if i == cursor { '❯' } else { ' ' };
            let mark = match checked {
                Some(checked) if checked[i] => "◉ ",
                Some(_) => "○ ",
                None => "",
            };
            queue!(
                self.out,
                Clear(ClearType::CurrentLine),
                Print(format!("{pointer} {mark}{choice}")),
                Print("\r\n")
            )?;
            lines += 1;
        }
        self.out.flush()?;
        Ok(lines)
    }

    fn erase(&mut self, lines: u16) -> io::Result<()> {
        if lines > 0 {
            queue!(self.out, MoveToPreviousLine(lines), Clear(ClearType::FromCursorDown))?;
        }
        self.out.flush()
    }

    /// Runs a list prompt. `checked` turns it into a checkbox list.
    fn run_list(
        &mut self,
        message: &str,
        header: Option<&str>,
        choices: &[String],
        mut checked: Option<Vec<bool>>,
    ) -> PromptResult<(usize, Option<Vec<bool>>)> {
        let hint = if checked.is_some() {
            "(space to check, enter to accept)"
        } else {
            "(use arrow keys)"
        };
        writeln!(self.out, "? {message} {hint}")?;

        let rows = terminal::size().map(|(_, rows)| rows as usize).unwrap_or(24);
        let visible = viewport_rows(rows, header.is_some(), choices.len());

        let _raw = RawMode::enable()?;
        let mut cursor = 0usize;
        let mut offset = 0usize;

        loop {
            offset = scroll_offset(cursor, offset, visible);

            let checks = checked.as_deref();
            let lines = self.draw_list(header, choices, cursor, checks, offset, visible)?;
            let key = self.read_list_key()?;
            self.erase(lines)?;

            match key {
                ListKey::Up => cursor = step_cursor(cursor, choices.len(), false),
                ListKey::Down => cursor = step_cursor(cursor, choices.len(), true),
                ListKey::Toggle => {
                    if let Some(checked) = checked.as_mut() {
                        if let Some(entry) = checked.get_mut(cursor) {
                            *entry = !*entry;
                        }
                    }
                }
                ListKey::Accept => return Ok((cursor, checked)),
                ListKey::Interrupt => return Err(PromptError::Interrupted),
                ListKey::Other => {}
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(PromptError::Interrupted);
        }
        Ok(line.trim().to_string())
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(
        &mut self,
        message: &str,
        header: Option<&str>,
        choices: &[String],
    ) -> PromptResult<usize> {
        if choices.is_empty() {
            return Err(PromptError::Interrupted);
        }
        let (index, _) = self.run_list(message, header, choices, None)?;
        self.line(&format!("  {}", choices[index].trim_end()));
        Ok(index)
    }

    fn multi_select(
        &mut self,
        message: &str,
        header: Option<&str>,
        choices: &[String],
    ) -> PromptResult<Vec<usize>> {
        if choices.is_empty() {
            return Ok(Vec::new());
        }
        let unchecked = Some(vec![false; choices.len()]);
        let (_, checked) = self.run_list(message, header, choices, unchecked)?;
        let selected: Vec<usize> = checked
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
            .collect();
        self.line(&format!("  {} selected", selected.len()));
        Ok(selected)
    }

    fn input<T>(
        &mut self,
        message: &str,
        default: Option<&str>,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> PromptResult<T> {
        let prompt = match default {
            Some(default) => format!("? {message} ({default}) "),
            None => format!("? {message} "),
        };
        loop {
            let answer = self.read_line(&prompt)?;
            let answer = match (answer.is_empty(), default) {
                (true, Some(default)) => default.to_string(),
                _ => answer,
            };
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => self.line(&format!(">> {message}")),
            }
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> PromptResult<bool> {
        let prompt = format!("? {message} {} ", if default { "(Y/n)" } else { "(y/N)" });
        loop {
            match self.read_line(&prompt)?.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.line(">> Please answer y or n"),
            }
        }
    }

    fn say(&mut self, text: &str) {
        self.line(text);
    }

    fn output(&mut self, text: &str) {
        println!("{text}");
    }
}
