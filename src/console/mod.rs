//! # Console Module
//!
//! An interactive command loop on top of [`SharedRingBuffer`].
//!
//! ## Plain English
//!
//! Type a letter, watch the buffer change. The console only ever calls the
//! buffer's public operations (`write`, `read`, `reset`, `snapshot`), so
//! it behaves exactly like any other caller would.
//!
//! Input and output are generic (`BufRead` / `Write`), so the same loop
//! runs on stdin/stdout or on in-memory buffers in tests.

mod command;

pub use command::{Command, HELP};

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::buffer::{BufferStats, SharedRingBuffer};
use crate::config::Config;
use crate::error::FifoResult;

/// Shown before each command
const PROMPT: &str = "> ";

/// Interactive command loop driving one buffer
pub struct Console<R, W> {
    buffer: SharedRingBuffer,
    input: R,
    output: W,

    /// Print the state after every mutating command
    echo_state: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console around an existing buffer
    pub fn new(buffer: SharedRingBuffer, input: R, output: W) -> Self {
        Self {
            buffer,
            input,
            output,
            echo_state: false,
        }
    }

    /// Creates a console and its buffer from a configuration
    pub fn with_config(config: &Config, input: R, output: W) -> FifoResult<Self> {
        let buffer = SharedRingBuffer::with_config(config)?;
        Ok(Self {
            echo_state: config.echo_state,
            ..Self::new(buffer, input, output)
        })
    }

    /// Runs until `q` or end of input.
    ///
    /// Bad commands and empty reads are reported and the loop carries on.
    /// Only I/O errors stop it early.
    ///
    /// ## Returns
    /// The buffer's counters at exit
    pub fn run(&mut self) -> FifoResult<BufferStats> {
        info!("Console started ({} slots)", self.buffer.capacity());

        let mut line = String::new();
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match Command::parse(trimmed) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(err) => writeln!(self.output, "error: {}", err)?,
            }
        }

        let stats = self.buffer.stats();
        info!("Console finished: {:?}", stats);
        Ok(stats)
    }

    /// Runs a single command against the buffer and prints the outcome
    pub fn execute(&mut self, command: Command) -> FifoResult<()> {
        debug!("Executing {:?}", command);

        match command {
            Command::Write(value) => match self.buffer.write(value) {
                Some(evicted) => writeln!(self.output, "wrote {} (evicted {})", value, evicted)?,
                None => writeln!(self.output, "wrote {}", value)?,
            },
            Command::Read => match self.buffer.read() {
                Ok(value) => writeln!(self.output, "read {}", value)?,
                Err(err) => writeln!(self.output, "error: {}", err)?,
            },
            Command::Reset => {
                self.buffer.reset();
                writeln!(self.output, "buffer reset")?;
            }
            Command::Info => writeln!(self.output, "{}", self.buffer.snapshot())?,
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }

        if self.echo_state && command.is_mutating() {
            writeln!(self.output, "{}", self.buffer.snapshot())?;
        }

        Ok(())
    }

    /// The buffer this console drives
    pub fn buffer(&self) -> &SharedRingBuffer {
        &self.buffer
    }

    /// Consumes the console, handing back its output
    pub fn into_output(self) -> W {
        self.output
    }
}

// ============================================
// TESTS
// ============================================
