//! Interactive play mode
//!
//! Line-based game loop: each line is a guess or a command. Definition lookups
//! run on a worker thread and are handed back to the session when they arrive.

use crate::daily::Clock;
use crate::definitions::{Definition, DefinitionRequest, DefinitionSource};
use crate::output::{print_board, print_stats};
use crate::session::{Effect, Mode, Session};
use crate::store::Store;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// How long to wait for a lookup before showing the board without it
const LOOKUP_WAIT: Duration = Duration::from_millis(300);

type Lookup = (DefinitionRequest, Option<Definition>);

/// Performs definition lookups off the game loop
struct LookupWorker {
    source: Arc<dyn DefinitionSource + Send + Sync>,
    tx: Sender<Lookup>,
    rx: Receiver<Lookup>,
}

impl LookupWorker {
    fn new(source: Arc<dyn DefinitionSource + Send + Sync>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    fn spawn(&self, request: DefinitionRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let definition = source.fetch(&request.word);
            // The receiver is gone once the game loop has exited
            let _ = tx.send((request, definition));
        });
    }

    /// Deliver every answer that has already arrived
    fn drain<S: Store, C: Clock>(&self, session: &mut Session<'_, S, C>) {
        while let Ok((request, definition)) = self.rx.try_recv() {
            session.deliver_definition(&request, definition);
        }
    }

    /// Wait briefly for one answer, then deliver whatever else is ready
    fn wait<S: Store, C: Clock>(&self, session: &mut Session<'_, S, C>) {
        if let Ok((request, definition)) = self.rx.recv_timeout(LOOKUP_WAIT) {
            session.deliver_definition(&request, definition);
        }
        self.drain(session);
    }
}

/// Run the interactive game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_play<S: Store, C: Clock, R: Rng + ?Sized>(
    session: &mut Session<'_, S, C>,
    mode: Mode,
    definitions: Arc<dyn DefinitionSource + Send + Sync>,
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        Wordle Daily                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in six tries.");
    println!("Commands: '?' for a hint, '!daily', '!random', '!stats', '!quit'\n");

    let worker = LookupWorker::new(definitions);
    let effects = session.start(mode, rng);
    handle_effects(&worker, session, effects);

    loop {
        worker.drain(session);
        print_board(session);

        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => {}
            "!quit" | "!q" | "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "?" | "!hint" => {
                session.hint();
            }
            "!daily" => {
                let effects = session.start_daily();
                handle_effects(&worker, session, effects);
            }
            "!random" | "!new" => {
                let effects = session.start_random(rng);
                handle_effects(&worker, session, effects);
            }
            "!stats" => print_stats(session.stats(), session.clock().today()),
            guess => match session.submit_guess(guess) {
                Ok(effects) => handle_effects(&worker, session, effects),
                Err(err) => println!("  {}", format!("❌ {err}").red()),
            },
        }
    }
}

fn handle_effects<S: Store, C: Clock>(
    worker: &LookupWorker,
    session: &mut Session<'_, S, C>,
    effects: Vec<Effect>,
) {
    let mut waiting = false;
    for effect in effects {
        match effect {
            Effect::LookupDefinition(request) => {
                worker.spawn(request);
                waiting = true;
            }
            Effect::ProgressSaved | Effect::StatsSaved => {
                tracing::trace!(?effect, "store updated");
            }
        }
    }
    if waiting {
        worker.wait(session);
    }
}

/// Read one trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("\n{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
