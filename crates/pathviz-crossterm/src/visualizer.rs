//! The [`Visualizer`] model: keyboard and mouse editing of a [`Session`]
//! and a per-frame render of its shared grid.

use pathviz_core::{Point, Preset, TileGrid, TileState};
use pathviz_search::{Algorithm, SearchError, Session};

use crate::app::{Effect, Model};
use crate::messages::{Key, MouseAction, Msg};
use crate::screen::{Cell, Color, Screen};

/// Terminal row of the first grid row; rows above hold the header.
pub const GRID_TOP: i32 = 2;

const EMPTY: Color = Color::from_rgb(200, 200, 200);
const OBSTACLE: Color = Color::from_rgb(25, 25, 25);
const START: Color = Color::from_rgb(0, 228, 48);
const GOAL: Color = Color::from_rgb(230, 41, 55);
const VISITED: Color = Color::from_rgb(170, 185, 215);
const PATH: Color = Color::from_rgb(253, 220, 110);
const INK: Color = Color::from_rgb(20, 20, 20);
const START_INK: Color = Color::from_rgb(76, 63, 47);

/// What a held mouse button is currently doing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum Drag {
    #[default]
    Idle,
    Paint,
    Erase,
    Start,
    Goal,
}

/// Terminal model of the search visualizer.
#[derive(Debug)]
pub struct Visualizer {
    session: Session,
    drag: Drag,
    show_vectors: bool,
    status: String,
}

impl Visualizer {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            drag: Drag::Idle,
            show_vectors: false,
            status: String::new(),
        }
    }

    /// Start with the direction-label view on or off.
    pub fn with_vectors(mut self, on: bool) -> Self {
        self.show_vectors = on;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn show_vectors(&self) -> bool {
        self.show_vectors
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    fn report(&mut self, res: Result<(), SearchError>) {
        match res {
            Ok(()) => {}
            // Dragging onto an occupied tile is routine.
            Err(SearchError::Grid(e)) if self.drag != Drag::Idle => {
                log::trace!("drag edit skipped: {e}");
            }
            Err(e) => {
                log::warn!("{e}");
                self.status = e.to_string();
            }
        }
    }

    fn on_key(&mut self, key: Key) {
        match key {
            Key::Char('b') => self.select(Algorithm::Bfs),
            Key::Char('d') => self.select(Algorithm::Dijkstra),
            Key::Char('a') => self.select(Algorithm::AStar),
            Key::Enter | Key::Char(' ') => {
                let res = self.session.launch();
                if res.is_ok() {
                    log::debug!("launched {}", self.session.algorithm());
                    self.status = format!("{} running", self.session.algorithm());
                }
                self.report(res);
            }
            Key::Char('c') => {
                let res = self.session.clear();
                self.status = "cleared".into();
                self.report(res);
            }
            Key::Char('p') => {
                let res = self.session.purge();
                self.status = "purged".into();
                self.report(res);
            }
            Key::Char(c @ '1'..='3') => {
                let n = c as u8 - b'0';
                if let Some(preset) = Preset::from_number(n) {
                    let res = self.session.load_preset(preset);
                    self.status = format!("preset {n}");
                    self.report(res);
                }
            }
            Key::Char('v') => self.show_vectors = !self.show_vectors,
            _ => {}
        }
    }

    fn select(&mut self, algorithm: Algorithm) {
        self.session.set_algorithm(algorithm);
        self.status = format!("{algorithm} selected");
    }

    fn tile_under(&self, pos: Point) -> Option<(Point, TileState)> {
        let grid = self.session.grid().read();
        let p = grid.tile_at(pos)?;
        Some((p, grid.tile(p)?.state))
    }

    fn on_mouse(&mut self, action: MouseAction, pos: Point) {
        match action {
            MouseAction::Main => {
                let Some((p, state)) = self.tile_under(pos) else {
                    return;
                };
                self.drag = match state {
                    TileState::Start => Drag::Start,
                    TileState::Goal => Drag::Goal,
                    _ => Drag::Paint,
                };
                self.drag_to(p);
            }
            MouseAction::Secondary => {
                let Some((p, _)) = self.tile_under(pos) else {
                    return;
                };
                self.drag = Drag::Erase;
                self.drag_to(p);
            }
            MouseAction::Move => {
                if self.drag == Drag::Idle {
                    return;
                }
                if let Some((p, _)) = self.tile_under(pos) {
                    self.drag_to(p);
                }
            }
            MouseAction::Release => self.drag = Drag::Idle,
        }
    }

    fn drag_to(&mut self, p: Point) {
        let res = match self.drag {
            Drag::Idle => Ok(()),
            Drag::Paint => self.session.place_obstacle(p).map(drop),
            Drag::Erase => self.session.erase_obstacle(p).map(drop),
            Drag::Start => self.session.move_start(p),
            Drag::Goal => self.session.move_goal(p),
        };
        self.report(res);
    }

    fn header(&self) -> String {
        let busy = if self.session.is_busy() { " [busy]" } else { "" };
        let view = if self.show_vectors { "vectors" } else { "tiles" };
        format!(
            "pathviz  algorithm: {}{busy}  view: {view}  {}",
            self.session.algorithm(),
            self.status
        )
    }

    fn summary(grid: &TileGrid) -> String {
        format!(
            "visited {}  path {}  obstacles {}",
            grid.count(TileState::Visited),
            grid.count(TileState::Path),
            grid.count(TileState::Obstacle)
        )
    }

    /// Glyph and colours for one tile.
    fn tile_cell(&self, state: TileState, label: Option<char>) -> Cell {
        let base = Cell::default().with_fg(INK);
        match state {
            TileState::Empty => base.with_bg(EMPTY),
            TileState::Obstacle => base.with_bg(OBSTACLE),
            TileState::Start => base
                .with_bg(START)
                .with_fg(START_INK)
                .with_char('S')
                .with_bold(true),
            TileState::Goal => base.with_bg(GOAL).with_char('G').with_bold(true),
            TileState::Visited | TileState::Path => {
                let bg = if state == TileState::Path { PATH } else { VISITED };
                match label.filter(|_| self.show_vectors) {
                    Some(ch) => base.with_bg(bg).with_char(ch),
                    None => base.with_bg(bg),
                }
            }
        }
    }
}

impl Model for Visualizer {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::KeyDown {
                key: Key::Char('q') | Key::Escape,
            } => return Some(Effect::End),
            // A release must always end the drag, even if a search started.
            Msg::Mouse {
                action: MouseAction::Release,
                ..
            } => self.drag = Drag::Idle,
            _ if self.session.is_busy() => {}
            Msg::KeyDown { key } => self.on_key(key),
            Msg::Mouse { action, pos } => self.on_mouse(action, pos),
            Msg::Init => {
                self.status = "enter: search  b/d/a: algorithm  1-3: presets  q: quit".into();
            }
            Msg::Screen { .. } | Msg::Tick => {}
        }
        None
    }

    fn draw(&self, screen: &mut Screen) {
        let heading = Cell::default().with_bold(true);
        screen.text(Point::new(0, 0), &self.header(), heading);

        let grid = self.session.grid().read();
        screen.text(Point::new(0, 1), &Self::summary(&grid), Cell::default());

        for tile in grid.tiles() {
            let cell = self.tile_cell(tile.state, tile.label.map(|d| d.arrow()));
            let r = tile.rect;
            for y in r.y..r.y + r.height {
                for x in r.x..r.x + r.width {
                    let glyph = if x == r.x && y == r.y { cell.ch } else { ' ' };
                    screen.set(Point::new(x, y), cell.with_char(glyph));
                }
            }
        }

        let help = "c: clear  p: purge  v: vectors  left: draw/move  right: erase";
        let bottom = grid.layout().origin.y
            + grid.rows() * (grid.layout().tile_height + grid.layout().gap);
        screen.text(Point::new(0, bottom), help, Cell::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Layout;
    use pathviz_search::{Pacing, SessionConfig};
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(10);

    fn visualizer() -> Visualizer {
        let config = SessionConfig {
            layout: Layout::terminal(Point::new(0, GRID_TOP)),
            pacing: Pacing::NONE,
            ..SessionConfig::default()
        };
        Visualizer::new(Session::new(config).unwrap())
    }

    /// Terminal cell of grid tile `(row, col)`.
    fn at(row: i32, col: i32) -> (i32, i32) {
        (col * 2, GRID_TOP + row)
    }

    fn click(v: &mut Visualizer, action: MouseAction, (x, y): (i32, i32)) {
        v.update(Msg::mouse(action, x, y));
    }

    fn state(v: &Visualizer, row: i32, col: i32) -> Option<TileState> {
        v.session().grid().read().state(Point::from_row_col(row, col))
    }

    #[test]
    fn quit_keys_end_even_while_busy() {
        let mut v = visualizer();
        let _held = v.session().busy().try_acquire().unwrap();
        assert_eq!(v.update(Msg::char('q')), Some(Effect::End));
        assert_eq!(v.update(Msg::key(Key::Escape)), Some(Effect::End));
    }

    #[test]
    fn left_drag_paints_and_right_click_erases() {
        let mut v = visualizer();
        click(&mut v, MouseAction::Main, at(10, 10));
        click(&mut v, MouseAction::Move, at(10, 11));
        click(&mut v, MouseAction::Move, (25, GRID_TOP + 10)); // second half of col 12
        click(&mut v, MouseAction::Release, at(10, 12));
        click(&mut v, MouseAction::Move, at(10, 13));
        for col in 10..=12 {
            assert_eq!(state(&v, 10, col), Some(TileState::Obstacle), "col {col}");
        }
        assert_eq!(state(&v, 10, 13), Some(TileState::Empty));

        click(&mut v, MouseAction::Secondary, at(10, 11));
        click(&mut v, MouseAction::Release, at(10, 11));
        assert_eq!(state(&v, 10, 11), Some(TileState::Empty));
    }

    #[test]
    fn dragging_start_moves_it_and_skips_obstacles() {
        let mut v = visualizer();
        click(&mut v, MouseAction::Main, at(3, 5));
        click(&mut v, MouseAction::Release, at(3, 5));
        // Start sits at row 3, col 3.
        click(&mut v, MouseAction::Main, at(3, 3));
        click(&mut v, MouseAction::Move, at(3, 4));
        click(&mut v, MouseAction::Move, at(3, 5));
        click(&mut v, MouseAction::Release, at(3, 5));
        let grid = v.session().grid().snapshot();
        assert_eq!(grid.start(), Point::from_row_col(3, 4));
        assert_eq!(grid.state(Point::from_row_col(3, 5)), Some(TileState::Obstacle));
        // The refused move onto the obstacle is not reported.
        assert!(v.status().is_empty());
    }

    #[test]
    fn enter_runs_selected_algorithm_and_locks_editing() {
        let mut v = visualizer();
        v.update(Msg::char('a'));
        assert_eq!(v.session().algorithm(), Algorithm::AStar);
        v.update(Msg::key(Key::Enter));
        assert!(v.session().wait_idle(WAIT));
        assert_eq!(v.session().grid().read().count(TileState::Path), 60);

        let _held = v.session().busy().try_acquire().unwrap();
        v.update(Msg::char('c'));
        click(&mut v, MouseAction::Main, at(0, 0));
        assert_eq!(v.session().grid().read().count(TileState::Path), 60);
        assert_eq!(state(&v, 0, 0), Some(TileState::Empty));
    }

    #[test]
    fn number_keys_load_presets() {
        let mut v = visualizer();
        v.update(Msg::char('2'));
        let grid = v.session().grid().snapshot();
        assert_eq!(grid.start(), Preset::Hook.start());
        assert_eq!(grid.count(TileState::Obstacle), 40);
        v.update(Msg::char('c'));
        assert_eq!(v.session().grid().read().count(TileState::Obstacle), 0);
    }

    #[test]
    fn refused_preset_is_reported() {
        let config = SessionConfig {
            rows: 5,
            cols: 5,
            start: Point::new(0, 0),
            goal: Point::new(4, 4),
            layout: Layout::terminal(Point::new(0, GRID_TOP)),
            pacing: Pacing::NONE,
            ..SessionConfig::default()
        };
        let mut v = Visualizer::new(Session::new(config).unwrap());
        v.update(Msg::char('1'));
        assert!(v.status().contains("outside the grid"), "{}", v.status());
        let grid = v.session().grid().snapshot();
        assert_eq!(grid.start(), Point::new(0, 0));
        assert_eq!(grid.count(TileState::Obstacle), 0);
    }

    #[test]
    fn draw_renders_tiles_and_vectors() {
        let mut v = visualizer();
        v.update(Msg::key(Key::Enter));
        assert!(v.session().wait_idle(WAIT));

        let mut screen = Screen::new(110, 30);
        v.draw(&mut screen);
        let (x, y) = at(3, 3);
        assert_eq!(screen.at(Point::new(x, y)).ch, 'S');
        assert_eq!(screen.at(Point::new(x, y)).bg, START);
        let (gx, gy) = at(21, 46);
        assert_eq!(screen.at(Point::new(gx, gy)).ch, 'G');

        // Without vectors, visited tiles are blank.
        let grid = v.session().grid().snapshot();
        let visited = grid
            .tiles()
            .find(|t| t.state == TileState::Visited)
            .unwrap();
        let p = Point::new(visited.rect.x, visited.rect.y);
        assert_eq!(screen.at(p).ch, ' ');
        assert_eq!(screen.at(p).bg, VISITED);

        v.update(Msg::char('v'));
        let mut screen = Screen::new(110, 30);
        v.draw(&mut screen);
        assert_eq!(screen.at(p).ch, visited.label.unwrap().arrow());
    }
}
