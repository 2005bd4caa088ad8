use zone_core::{Rect, Vec2};
use zone_text::{script_to_commands, BreakTarget, Command, Font};

use crate::page::{Glyph, Page};
use crate::style::{DefaultStyleHandler, StyleHandler, StyleState};

/// Page geometry and glyph defaults for one layout run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Maximum line width in pixels.
    pub line_width: u32,
    /// Lines per page. 0 is treated as 1.
    pub line_count: usize,
    /// Vertical gap between lines, added to the font's line height.
    pub line_spacing: u32,
    /// Character measured and drawn in place of unmapped ones.
    pub fallback: char,
    /// Initial `hidden` flag of every glyph.
    pub start_hidden: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_width: 240,
            line_count: 9999,
            line_spacing: 4,
            fallback: '?',
            start_hidden: true,
        }
    }
}

impl LayoutConfig {
    pub fn new(line_width: u32, line_count: usize) -> Self {
        Self {
            line_width,
            line_count,
            ..Self::default()
        }
    }

    /// Unbounded paging with glyphs visible from the start.
    pub fn for_testing() -> Self {
        Self {
            line_count: usize::MAX,
            start_hidden: false,
            ..Self::default()
        }
    }
}

/// Lays out scripts into pages of positioned glyphs.
///
/// Layout runs in two passes. First, every run of unbreakable glyphs
/// wider than a line is made breakable everywhere. Then the command list
/// is cut into lines at breaks, or at the last breakable glyph before
/// the line overflows. A breaking space is dropped.
pub struct TextLayout<'f, H = DefaultStyleHandler> {
    font: &'f Font,
    config: LayoutConfig,
    handler: H,
}

impl<'f> TextLayout<'f, DefaultStyleHandler> {
    pub fn new(font: &'f Font, config: LayoutConfig) -> Self {
        Self {
            font,
            config,
            handler: DefaultStyleHandler,
        }
    }
}

impl<'f, H: StyleHandler> TextLayout<'f, H> {
    /// Replace the style interpreter.
    pub fn with_handler<G: StyleHandler>(self, handler: G) -> TextLayout<'f, G> {
        TextLayout {
            font: self.font,
            config: self.config,
            handler,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn font(&self) -> &'f Font {
        self.font
    }

    pub fn layout_script(&mut self, script: &str) -> Vec<Page> {
        self.layout_commands(script_to_commands(script))
    }

    pub fn layout_commands(&mut self, mut commands: Vec<Command>) -> Vec<Page> {
        self.break_long_spans(&mut commands);

        let mut state = LayoutState::new(self.font, &self.config);
        let mut rest = commands.as_slice();

        while let Some(index) = self.find_next_break(rest) {
            state.emit_line(&rest[..index], &mut self.handler);
            rest = &rest[index..];

            match rest.first() {
                Some(Command::Break { target }) => {
                    log::trace!("Break ({target:?}) at line {}", state.line);
                    state.apply_break(*target);
                    rest = &rest[1..];
                }
                Some(Command::Glyph { ch: ' ', .. }) => {
                    log::trace!("Wrap at space, line {}", state.line);
                    rest = &rest[1..];
                    state.end_line();
                }
                _ => {
                    log::trace!("Wrap mid-span, line {}", state.line);
                    state.end_line();
                }
            }
        }

        state.emit_line(rest, &mut self.handler);
        state.end_page();

        log::debug!(
            "Laid out {} commands into {} pages ({} glyphs)",
            commands.len(),
            state.pages.len(),
            state.pages.iter().map(Vec::len).sum::<usize>(),
        );
        state.pages
    }

    /// Mark every glyph breakable in any unbreakable run wider than a line.
    pub fn break_long_spans(&self, commands: &mut [Command]) {
        let mut start = 0;
        for end in 0..=commands.len() {
            let boundary = commands
                .get(end)
                .map_or(true, |command| command.is_break() || command.is_breakable());
            if !boundary {
                continue;
            }

            let span = &mut commands[start..end];
            let width: u32 = span.iter().map(|command| self.width_of(command)).sum();
            if width > self.config.line_width {
                log::trace!("Forcing breaks in {}-command span ({width}px)", span.len());
                for command in span.iter_mut() {
                    if let Command::Glyph { breakable, .. } = command {
                        *breakable = true;
                    }
                }
            }
            start = end + 1;
        }
    }

    fn width_of(&self, command: &Command) -> u32 {
        match command {
            Command::Glyph { ch, .. } => self.font.advance(*ch, self.config.fallback),
            _ => 0,
        }
    }

    /// Index of the next line break in `commands`, or `None` when the
    /// rest fits on the current line.
    fn find_next_break(&self, commands: &[Command]) -> Option<usize> {
        let mut width = 0u32;
        let index = commands.iter().enumerate().find_map(|(i, command)| match command {
            Command::Break { .. } => Some(i),
            Command::Style { .. } => None,
            Command::Glyph { .. } => {
                width += self.width_of(command);
                if width > self.config.line_width {
                    commands[..=i].iter().rposition(Command::is_breakable).or(Some(i))
                } else {
                    None
                }
            }
        })?;

        // A glyph wider than the line sits alone on it.
        match commands.first() {
            Some(Command::Glyph { ch, .. }) if index == 0 && *ch != ' ' => {
                (commands.len() > 1).then_some(1)
            }
            _ => Some(index),
        }
    }
}

/// Lay out `script` with the default style interpreter.
pub fn script_to_pages(script: &str, font: &Font, config: &LayoutConfig) -> Vec<Page> {
    TextLayout::new(font, *config).layout_script(script)
}

/// Running state of one layout pass.
struct LayoutState<'f> {
    font: &'f Font,
    line_count: usize,
    line_height: u32,
    fallback: char,
    start_hidden: bool,
    styles: StyleState,
    page: Page,
    line: usize,
    pages: Vec<Page>,
}

impl<'f> LayoutState<'f> {
    fn new(font: &'f Font, config: &LayoutConfig) -> Self {
        Self {
            font,
            line_count: config.line_count.max(1),
            line_height: font.line_height + config.line_spacing,
            fallback: config.fallback,
            start_hidden: config.start_hidden,
            styles: StyleState::new(),
            page: Page::new(),
            line: 0,
            pages: Vec::new(),
        }
    }

    fn end_line(&mut self) {
        self.line += 1;
        if self.line == self.line_count {
            self.pages.push(std::mem::take(&mut self.page));
            self.line = 0;
        }
    }

    /// Close the current page. Its remaining lines stay blank.
    fn end_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.page));
        self.line = 0;
    }

    fn apply_break(&mut self, target: BreakTarget) {
        match target {
            BreakTarget::Line => self.end_line(),
            BreakTarget::Page => self.end_page(),
        }
    }

    /// Place the glyphs of one line and feed its style commands to `handler`.
    fn emit_line<H: StyleHandler>(&mut self, commands: &[Command], handler: &mut H) {
        let y = (self.line as u64 * self.line_height as u64).min(i32::MAX as u64) as i32;
        let mut x = 0u32;

        for command in commands {
            match command {
                Command::Glyph { ch, .. } => {
                    let (sprite, advance) = self
                        .font
                        .glyph_or(*ch, self.fallback)
                        .map_or((Rect::EMPTY, 0), |glyph| (glyph.sprite, glyph.spacing));
                    self.page.push(Glyph::new(
                        Vec2::new(x as i32, y),
                        sprite,
                        self.start_hidden,
                        self.styles.clone(),
                    ));
                    x += advance;
                }
                Command::Style { directive } => handler.apply(&mut self.styles, directive),
                Command::Break { .. } => {}
            }
        }
    }
}
