//! Terminal front end for the pathviz search visualizer.
//!
//! [`Visualizer`] is the model: it turns key and mouse messages into
//! busy-gated [`Session`](pathviz_search::Session) edits and draws the shared
//! grid into a [`Screen`]. [`App`] runs the poll-update-draw loop against a
//! [`Driver`], normally the crossterm-backed [`CrosstermDriver`].

pub mod app;
pub mod ascii;
pub mod driver;
pub mod messages;
pub mod screen;
pub mod visualizer;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use ascii::render_ascii;
pub use driver::CrosstermDriver;
pub use messages::{Key, MouseAction, Msg};
pub use screen::{Cell, Color, Frame, Screen};
pub use visualizer::{GRID_TOP, Visualizer};
