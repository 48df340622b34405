//! Fire-and-forget search threads.
//!
//! The render loop and the search thread share only the [`SharedGrid`] and
//! the [`BusyFlag`]. The flag is raised here, on the caller's thread, so the
//! very next frame already sees it; the detached thread lowers it when the
//! search ends.

use std::thread;

use pathviz_core::BusyFlag;

use crate::canvas::{Canvas, SharedGrid};
use crate::error::SearchError;
use crate::search::{Algorithm, Outcome, Pacing, Search};

/// Start `algorithm` on its own thread against `grid` and return at once.
///
/// The thread is never joined. Fails with [`SearchError::Busy`] if a search
/// is already running, or [`SearchError::Spawn`] if no thread could be
/// created (the flag is lowered again in that case).
pub fn spawn_search(
    algorithm: Algorithm,
    grid: &SharedGrid,
    busy: &BusyFlag,
    pacing: Pacing,
) -> Result<(), SearchError> {
    let guard = busy.try_acquire().ok_or(SearchError::Busy)?;
    let (start, goal) = grid.inspect(|g| (g.start(), g.goal()));
    let mut canvas = grid.clone();

    thread::Builder::new()
        .name(format!("pathviz-{}", algorithm.name().to_lowercase()))
        .spawn(move || {
            let mut search = Search::with_pacing(pacing);
            match search.run_guarded(algorithm, &mut canvas, start, goal, guard) {
                Ok(Outcome::Found { path }) => {
                    log::info!("{algorithm}: reached goal in {} steps", path.len())
                }
                Ok(Outcome::Exhausted) => log::info!("{algorithm}: goal unreachable"),
                Err(e) => log::error!("{algorithm}: {e}"),
            }
        })
        .map_err(SearchError::Spawn)?;

    log::debug!("spawned {algorithm} search thread");
    Ok(())
}
