//! Page composition and the interactive viewer loop.

use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::{cursor, execute, terminal};

use crate::content::ContentStore;
use crate::error::FolioResult;
use crate::ui::sections::{
    AboutView, ContactView, ExperienceView, FooterView, HeroView, ProjectsView, SkillsView,
};
use crate::ui::shell::{NavShell, NAV_ITEMS};
use crate::ui::{SectionId, UiContext};

const SCROLL_STEP: usize = 2;
const ANIMATION_STRIDE: usize = 4;
const ANIMATION_FRAME: Duration = Duration::from_millis(8);

/// The fully rendered page: every section laid out top to bottom, with the
/// starting line of each section recorded as a navigation anchor.
#[derive(Debug, Clone)]
pub struct Page {
    lines: Vec<String>,
    anchors: Vec<(SectionId, usize)>,
}

impl Page {
    /// Render every section in page order and record its anchor.
    pub fn compose(store: &ContentStore, ctx: &UiContext) -> Self {
        let mut lines: Vec<String> = Vec::new();
        let mut anchors = Vec::new();

        let mut push_section = |id: SectionId, body: String| {
            anchors.push((id, lines.len()));
            lines.extend(body.lines().map(|l| l.to_string()));
            lines.push(String::new());
        };

        push_section(SectionId::Hero, HeroView::new(&store.profile).render(ctx));
        push_section(
            SectionId::About,
            AboutView::new(
                &store.summary,
                &store.statistics,
                &store.education,
                &store.certifications,
            )
            .render(ctx),
        );
        push_section(
            SectionId::Experience,
            ExperienceView::new(&store.experience).render(ctx),
        );
        push_section(
            SectionId::Skills,
            SkillsView::new(&store.skills, &store.certifications, &store.core_competencies)
                .render(ctx),
        );
        push_section(
            SectionId::Projects,
            ProjectsView::new(&store.projects).render(ctx),
        );
        push_section(
            SectionId::Contact,
            ContactView::new(&store.contact).render(ctx),
        );
        push_section(
            SectionId::Footer,
            FooterView::new(&store.profile, &store.footer).render(ctx),
        );

        Self { lines, anchors }
    }

    pub fn anchor_offset(&self, id: SectionId) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, offset)| *offset)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One step of the viewer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ToTop,
    ToBottom,
    Navigate(SectionId),
    ToggleMenu,
    CursorUp,
    CursorDown,
    Activate,
    Dismiss,
    Quit,
}

/// Map a key press to an action. The menu captures Up/Down/Enter while open.
pub fn key_to_action(key: KeyEvent, menu_open: bool) -> Option<Action> {
    if menu_open {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => return Some(Action::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => return Some(Action::CursorDown),
            KeyCode::Enter => return Some(Action::Activate),
            KeyCode::Esc => return Some(Action::Dismiss),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::ToTop),
        KeyCode::End | KeyCode::Char('G') => Some(Action::ToBottom),
        KeyCode::Char('m') | KeyCode::Tab => Some(Action::ToggleMenu),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Some(Action::Navigate(NAV_ITEMS[index]))
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    ScrollTo(usize),
    Quit,
}

pub struct App {
    pub shell: NavShell,
    pub page: Page,
    pub offset: usize,
    ctx: UiContext,
}

impl App {
    pub fn new(store: &ContentStore, ctx: UiContext) -> Self {
        Self {
            shell: NavShell::new(),
            page: Page::compose(store, &ctx),
            offset: 0,
            ctx,
        }
    }

    fn body_rows(&self) -> usize {
        let header_rows = if self.shell.menu_open {
            2 + NAV_ITEMS.len()
        } else {
            2
        };
        (self.ctx.height as usize).saturating_sub(header_rows).max(1)
    }

    fn max_offset(&self) -> usize {
        self.page.len().saturating_sub(self.body_rows())
    }

    /// Apply one action to the state machine. Pure except for shell state.
    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::ScrollUp => Outcome::ScrollTo(self.offset.saturating_sub(SCROLL_STEP)),
            Action::ScrollDown => {
                Outcome::ScrollTo((self.offset + SCROLL_STEP).min(self.max_offset()))
            }
            Action::PageUp => Outcome::ScrollTo(self.offset.saturating_sub(self.body_rows())),
            Action::PageDown => {
                Outcome::ScrollTo((self.offset + self.body_rows()).min(self.max_offset()))
            }
            Action::ToTop => Outcome::ScrollTo(self.shell.to_top()),
            Action::ToBottom => {
                self.shell.close_menu();
                Outcome::ScrollTo(self.max_offset())
            }
            Action::Navigate(target) => {
                let page = &self.page;
                match self
                    .shell
                    .navigate(target, |id| page.anchor_offset(id))
                {
                    Some(offset) => Outcome::ScrollTo(offset.min(self.max_offset())),
                    None => Outcome::Continue,
                }
            }
            Action::ToggleMenu => {
                self.shell.toggle_menu();
                Outcome::Continue
            }
            Action::CursorUp => {
                self.shell.cursor_up();
                Outcome::Continue
            }
            Action::CursorDown => {
                self.shell.cursor_down();
                Outcome::Continue
            }
            Action::Activate => {
                let target = self.shell.selected();
                self.apply(Action::Navigate(target))
            }
            Action::Dismiss => {
                self.shell.close_menu();
                Outcome::Continue
            }
            Action::Quit => {
                if self.shell.menu_open {
                    self.shell.close_menu();
                    Outcome::Continue
                } else {
                    Outcome::Quit
                }
            }
        }
    }

    fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
        self.shell.on_scroll(self.offset);
    }

    fn draw(&self, out: &mut std::io::Stdout) -> std::io::Result<()> {
        execute!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        for line in self.shell.render_header(&brand(), &self.ctx) {
            write!(out, "{}\r\n", line)?;
        }

        let rows = self.body_rows();
        let end = (self.offset + rows).min(self.page.len());
        for line in &self.page.lines()[self.offset..end] {
            write!(out, "{}\r\n", line)?;
        }

        out.flush()
    }

    /// Scroll toward `target`, stepping through intermediate offsets when
    /// animation is enabled.
    fn scroll_to(&mut self, target: usize, out: &mut std::io::Stdout) -> std::io::Result<()> {
        if !self.ctx.animation || target == self.offset {
            self.set_offset(target);
            return self.draw(out);
        }

        while self.offset != target {
            let next = if target > self.offset {
                (self.offset + ANIMATION_STRIDE).min(target)
            } else {
                self.offset.saturating_sub(ANIMATION_STRIDE).max(target)
            };
            self.set_offset(next);
            self.draw(out)?;
            std::thread::sleep(ANIMATION_FRAME);
        }
        Ok(())
    }

    /// Run the interactive viewer until the user quits.
    pub fn run(&mut self, store: &ContentStore) -> FolioResult<()> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.event_loop(store, &mut out);

        execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(
        &mut self,
        store: &ContentStore,
        out: &mut std::io::Stdout,
    ) -> FolioResult<()> {
        self.draw(out)?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    let Some(action) = key_to_action(key, self.shell.menu_open) else {
                        continue;
                    };
                    match self.apply(action) {
                        Outcome::Quit => return Ok(()),
                        Outcome::ScrollTo(target) => self.scroll_to(target, out)?,
                        Outcome::Continue => self.draw(out)?,
                    }
                }
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized, recomposing page");
                    self.ctx.width = width;
                    self.ctx.height = height;
                    self.page = Page::compose(store, &self.ctx);
                    self.set_offset(self.offset);
                    self.draw(out)?;
                }
                _ => {}
            }
        }
    }
}

fn brand() -> String {
    crate::content::store().profile.name.clone()
}
