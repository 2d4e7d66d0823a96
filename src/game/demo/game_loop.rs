//! Two-device duel in the terminal.
//!
//! The local device ("blue") is steered from stdin, the opponent ("red") by a
//! [`Bot`]. Both share one scheduler clock and an infrared link pair.

use std::ops::ControlFlow;

use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::config::tasks::BOT_ACTION_PERIOD;
use crate::device::IrLink;
use crate::game::demo::board::Device;
use crate::game::demo::bot::Bot;
use crate::game::demo::command::{Command, CommandError, HELP};
use crate::game::demo::render::print_device;
use crate::game::demo::scheduler::{Scheduler, TaskRates};

pub type CommandResult = Result<Command, CommandError>;

pub struct Duel {
    pub blue: Device,
    pub red: Device,
    bot: Bot<StdRng>,
    scheduler: Scheduler,
    tick: u64,
}

impl Duel {
    pub fn new(rates: TaskRates, rng: StdRng) -> Self {
        let (blue_link, red_link) = IrLink::pair();
        Self {
            blue: Device::new("blue", blue_link),
            red: Device::new("red", red_link),
            bot: Bot::new(rng, BOT_ACTION_PERIOD),
            scheduler: Scheduler::new(rates),
            tick: 0,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advances both devices by one base tick. Returns true if the local
    /// device changed phase.
    pub fn advance(&mut self) -> bool {
        self.tick += 1;
        let changed = self.blue.run_due(&self.scheduler, self.tick);
        self.red.run_due(&self.scheduler, self.tick);
        self.bot.act(&mut self.red, self.tick);
        changed
    }

    pub fn handle(&mut self, command: CommandResult) -> ControlFlow<()> {
        match command {
            Ok(Command::Quit) => return ControlFlow::Break(()),
            Ok(Command::Nav(event)) => self.blue.press(event),
            Ok(Command::Show) => print_device(&self.blue),
            Ok(Command::Status) => match self.blue.snapshot() {
                Ok(json) => println!("{json}"),
                Err(e) => warn!("[Duel] failed to serialize device: {}", e),
            },
            Ok(Command::Help) => println!("{HELP}"),
            Err(CommandError::Empty) => {}
            Err(e) => println!("{e}. {HELP}"),
        }
        ControlFlow::Continue(())
    }

    /// Runs until `commands` yields `quit` or closes.
    pub async fn drive(&mut self, mut commands: mpsc::UnboundedReceiver<CommandResult>, rates: TaskRates) {
        let mut ticker = interval(rates.tick_period());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.advance() {
                        print_device(&self.blue);
                    }
                }
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    if self.handle(command).is_break() {
                        break;
                    }
                }
            }
        }
    }
}

/// Reads commands from stdin on a background task.
fn spawn_command_reader() -> mpsc::UnboundedReceiver<CommandResult> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line.parse::<Command>()).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("[Duel] stdin closed: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

pub async fn run_duel(rates: TaskRates) -> std::io::Result<()> {
    let mut duel = Duel::new(rates, StdRng::from_rng(&mut rand::rng()));

    println!("HOUSE duel: you are blue, red is a bot.");
    println!("{HELP}");
    print_device(&duel.blue);

    duel.drive(spawn_command_reader(), rates).await;

    println!("Bye after {} ticks.", duel.tick());
    Ok(())
}
