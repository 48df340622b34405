//! The model-update-draw loop: [`Model`], [`Driver`], [`Effect`], [`App`].

use std::sync::mpsc::{self, Receiver, Sender};

use crate::messages::Msg;
use crate::screen::{Frame, Screen, compute_frame};

/// A side-effect returned by [`Model::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Stop the loop.
    End,
}

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `screen`.
    fn draw(&self, screen: &mut Screen);
}

/// Terminal (or test) back end.
pub trait Driver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Push any pending input through `tx`. May block briefly.
    fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn std::error::Error>>;

    /// Write a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Restore the terminal. Must be safe to call after a failed `init`.
    fn close(&mut self);
}

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: i32,
    pub height: i32,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    width: i32,
    height: i32,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            width: config.width,
            height: config.height,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run until the model returns [`Effect::End`].
    ///
    /// Every iteration polls the driver, appends a [`Msg::Tick`], feeds all
    /// queued messages to the model, then draws and flushes only the cells
    /// that changed. The driver is closed on every exit path.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let res = self.driver.init().and_then(|()| self.event_loop());
        self.driver.close();
        res
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        let mut prev = Screen::new(self.width, self.height);
        let mut curr = Screen::new(self.width, self.height);

        loop {
            self.driver.poll_msgs(&tx)?;
            tx.send(Msg::Tick).ok();
            if self.process_pending(&rx, &mut prev, &mut curr)? {
                return Ok(());
            }
        }
    }

    /// Drain queued messages, update the model, draw, diff and flush.
    /// Returns `true` if the app should stop.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        prev: &mut Screen,
        curr: &mut Screen,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        while let Ok(msg) = rx.try_recv() {
            if let Msg::Screen { width, height } = msg {
                self.width = width;
                self.height = height;
                *curr = Screen::new(width, height);
            }
            if let Some(Effect::End) = self.model.update(msg) {
                return Ok(true);
            }
        }

        curr.fill(Default::default());
        self.model.draw(curr);
        let frame = compute_frame(prev, curr);
        if !frame.cells.is_empty() {
            self.driver.flush(frame)?;
        }
        prev.copy_from(curr);
        Ok(false)
    }
}
