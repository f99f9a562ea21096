mod renderer;
mod results;

use std::fmt;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use crossterm::{
    QueueableCommand, cursor,
    event::{self, KeyCode, KeyEventKind},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::Direction;
use crate::projection::{OccupancyGrid, project, projected};
use crate::{generate, solve};

use renderer::Overlay;

/// Smallest playable maze.
pub const MIN_SIZE: u8 = 2;
/// Largest maze the menu accepts.
pub const MAX_SIZE: u8 = 25;

/// One entry of the level menu.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuChoice {
    Level(u8),
    CustomLevel,
    Statistics,
    Quit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::Level(side) => write!(f, "{side}x{side} maze"),
            MenuChoice::CustomLevel => write!(f, "Your own size"),
            MenuChoice::Statistics => write!(f, "Statistics"),
            MenuChoice::Quit => write!(f, "Exit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RoundOutcome {
    /// The player reached the finish marker
    Won,
    /// The player backed out with q or Esc
    Abandoned,
}

pub struct App {
    /// Fixed maze size from the command line; skips the level menu when set
    size: Option<u8>,
    /// Seed for maze generation and the hint walk; random when unset
    seed: Option<u64>,
    /// File the win results are appended to
    results_path: PathBuf,
}

impl App {
    const MENU: [MenuChoice; 6] = [
        MenuChoice::Level(10),
        MenuChoice::Level(15),
        MenuChoice::Level(20),
        MenuChoice::CustomLevel,
        MenuChoice::Statistics,
        MenuChoice::Quit,
    ];

    pub fn new(size: Option<u8>, seed: Option<u64>, results_path: PathBuf) -> Self {
        App {
            size,
            seed,
            results_path,
        }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main application loop: level menu, rounds, statistics.
    pub fn run(&self, stdout: &mut Stdout) -> anyhow::Result<()> {
        tracing::info!("Started main app loop");
        if let Some(side) = self.size {
            self.play(stdout, side)?;
        } else {
            loop {
                match App::select_from_menu(
                    stdout,
                    "Pick a maze (arrow keys + Enter, Esc to exit):",
                    &App::MENU,
                )? {
                    None | Some(MenuChoice::Quit) => break,
                    Some(MenuChoice::Statistics) => self.show_statistics(stdout)?,
                    Some(MenuChoice::CustomLevel) => {
                        if let Some(side) = App::ask_maze_size(stdout)? {
                            self.play(stdout, side)?;
                        }
                    }
                    Some(MenuChoice::Level(side)) => self.play(stdout, side)?,
                }
            }
        }
        tracing::info!("Exiting main app loop");
        Ok(())
    }

    /// One round: generate, precompute the hint path, project, then hand
    /// control to the navigation loop. A win is timed and recorded.
    fn play(&self, stdout: &mut Stdout, side: u8) -> anyhow::Result<()> {
        tracing::info!("[game] Starting a {side}x{side} round");
        let carve_start = (side / 2, side / 2);
        let grid = generate(side, carve_start, self.seed)?;
        let hint = solve(&grid, self.seed)?;
        let cells = project(&grid);

        let mut round = GameRound::new(cells, &hint);
        let started = Instant::now();
        let outcome = round.navigate(stdout)?;
        tracing::info!("[game] Round ended: {:?}", outcome);

        if outcome == RoundOutcome::Won {
            let elapsed = started.elapsed();
            queue!(stdout, cursor::MoveTo(0, round.cells.side() + 3))?;
            stdout.queue(style::PrintStyledContent(
                "You have won!\r\n"
                    .with(Color::Green)
                    .attribute(Attribute::Bold),
            ))?;
            stdout.queue(style::Print(format!(
                "Result: {}\r\n",
                results::format_elapsed(elapsed)
            )))?;
            stdout.flush()?;
            results::append(&self.results_path, side, elapsed).with_context(|| {
                format!(
                    "could not record the result in {}",
                    self.results_path.display()
                )
            })?;
            App::ask_key_to_continue(stdout)?;
        }
        Ok(())
    }

    /// Print the results log, or a nudge if it does not exist yet.
    fn show_statistics(&self, stdout: &mut Stdout) -> anyhow::Result<()> {
        queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        stdout.queue(style::PrintStyledContent(
            "Results so far\r\n\r\n"
                .with(Color::Yellow)
                .attribute(Attribute::Bold),
        ))?;
        match results::read(&self.results_path)? {
            Some(contents) => {
                for line in contents.lines() {
                    stdout.queue(style::Print(format!("{line}\r\n")))?;
                }
            }
            None => {
                stdout.queue(style::Print("You haven't played any game yet :(\r\n"))?;
            }
        }
        stdout.flush()?;
        App::ask_key_to_continue(stdout)?;
        Ok(())
    }

    /// Present a menu and let the user pick an entry with the arrow keys.
    /// Returns `None` if the user backs out with Esc or q.
    fn select_from_menu<T: fmt::Display + Copy>(
        stdout: &mut Stdout,
        title: &str,
        options: &[T],
    ) -> io::Result<Option<T>> {
        let mut selected = 0;
        loop {
            queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
            stdout.queue(style::PrintStyledContent(title.with(Color::Yellow)))?;
            for (i, option) in options.iter().enumerate() {
                if i == selected {
                    stdout.queue(style::SetAttribute(Attribute::Reverse))?;
                }
                stdout.queue(style::Print(format!("\r\n  {option}")))?;
                if i == selected {
                    stdout.queue(style::SetAttribute(Attribute::NoReverse))?;
                }
            }
            stdout.flush()?;

            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if kind != KeyEventKind::Press {
                    continue;
                }
                match code {
                    KeyCode::Up => {
                        selected = match selected {
                            0 => options.len() - 1,
                            _ => selected - 1,
                        };
                    }
                    KeyCode::Down => {
                        selected = if selected + 1 >= options.len() {
                            0
                        } else {
                            selected + 1
                        };
                    }
                    KeyCode::Enter => return Ok(Some(options[selected])),
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(None),
                    _ => {}
                }
            }
        }
    }

    /// Inline prompt for a custom maze size with live validation feedback.
    /// Returns `None` if the user backs out with Esc.
    fn ask_maze_size(stdout: &mut Stdout) -> io::Result<Option<u8>> {
        let mut input = String::new();
        loop {
            let parsed = input
                .parse::<u8>()
                .ok()
                .filter(|n| (MIN_SIZE..=MAX_SIZE).contains(n));
            let valid = parsed.is_some();

            queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
            stdout.queue(style::PrintStyledContent(
                format!("Maze size ({MIN_SIZE}-{MAX_SIZE}), Enter to confirm, Esc to go back: ")
                    .with(Color::Cyan),
            ))?;
            let color = if valid || input.is_empty() {
                Color::Green
            } else {
                Color::Red
            };
            stdout.queue(style::PrintStyledContent(input.clone().with(color)))?;
            if !valid && !input.is_empty() {
                stdout.queue(style::PrintStyledContent(
                    format!("\r\nValue must be a whole number in [{MIN_SIZE}; {MAX_SIZE}]")
                        .with(Color::DarkGrey),
                ))?;
            }
            stdout.flush()?;

            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if kind != KeyEventKind::Press {
                    continue;
                }
                match code {
                    KeyCode::Enter => {
                        if let Some(size) = parsed {
                            return Ok(Some(size));
                        }
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => input.push(c),
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    }

    fn ask_key_to_continue(stdout: &mut Stdout) -> io::Result<()> {
        stdout.queue(style::PrintStyledContent(
            "\r\nPress any key to continue...".with(Color::Blue),
        ))?;
        stdout.flush()?;
        App::wait_for_key()
    }

    /// Block until any key is pressed.
    fn wait_for_key() -> io::Result<()> {
        loop {
            if let event::Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

/// A maze being walked. The player lives in projected coordinates and is
/// always on an odd-odd cell; moving crosses the coordinate in between,
/// which is open exactly when the logical wall there was carved away.
struct GameRound {
    cells: OccupancyGrid,
    /// Solver path in projected coordinates, drawn when hints are on
    hint: Vec<(u16, u16)>,
    player: (u16, u16),
    finish: (u16, u16),
    show_hint: bool,
}

impl GameRound {
    fn new(cells: OccupancyGrid, hint: &[(u8, u8)]) -> Self {
        let side = cells.side();
        GameRound {
            player: (1, 1),
            finish: (side - 2, side - 2),
            hint: hint.iter().map(|&coord| projected(coord)).collect(),
            show_hint: false,
            cells,
        }
    }

    /// Keyboard loop for one round. Redraws after every effective input
    /// and returns as soon as the round is decided.
    fn navigate(&mut self, stdout: &mut Stdout) -> io::Result<RoundOutcome> {
        self.draw(stdout)?;
        loop {
            let code = match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => key.code,
                event::Event::Resize(_, _) => {
                    self.draw(stdout)?;
                    continue;
                }
                _ => continue,
            };
            let moved = match code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(RoundOutcome::Abandoned),
                KeyCode::Char('h') => {
                    self.show_hint = !self.show_hint;
                    tracing::debug!("[game] Hint overlay on: {}", self.show_hint);
                    self.draw(stdout)?;
                    false
                }
                KeyCode::Char('a') | KeyCode::Left => self.try_move(Direction::West),
                KeyCode::Char('d') | KeyCode::Right => self.try_move(Direction::East),
                KeyCode::Char('w') | KeyCode::Up => self.try_move(Direction::North),
                KeyCode::Char('s') | KeyCode::Down => self.try_move(Direction::South),
                _ => false,
            };
            if moved {
                self.draw(stdout)?;
                if self.player == self.finish {
                    return Ok(RoundOutcome::Won);
                }
            }
        }
    }

    /// Attempt to move the player one maze cell (two projected cells) in
    /// the given direction. Returns whether the player moved.
    fn try_move(&mut self, dir: Direction) -> bool {
        // The coordinate one step away is the wall slot between the player
        // and the target cell; the border is always closed, so the
        // two-step target stays in bounds whenever the slot is open.
        let gate = GameRound::step(self.player, dir, 1);
        if !self.cells[gate] {
            return false;
        }
        self.player = GameRound::step(self.player, dir, 2);
        tracing::debug!("[game] Player moved {:?} to {:?}", dir, self.player);
        true
    }

    fn step(from: (u16, u16), dir: Direction, dist: u16) -> (u16, u16) {
        let (x, y) = from;
        match dir {
            Direction::West => (x - dist, y),
            Direction::East => (x + dist, y),
            Direction::North => (x, y - dist),
            Direction::South => (x, y + dist),
        }
    }

    fn draw(&self, stdout: &mut Stdout) -> io::Result<()> {
        let overlay = Overlay {
            player: self.player,
            start: (1, 1),
            finish: self.finish,
            hint: self.show_hint.then_some(self.hint.as_slice()),
        };
        renderer::draw(stdout, &self.cells, &overlay)
    }
}
