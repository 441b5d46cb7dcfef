//! Command executor
//! Maps each parsed command onto exactly one store, network or filesystem operation

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::anu::QrnSource;
use crate::command::definitions::help_text;
use crate::command::types::{Command, Setting};
use crate::display::display;
use crate::error::Result;
use crate::store::Store;

/// Result of executing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Keep prompting
    Continue,
    /// The console should exit
    Quit,
}

/// Everything a command may touch
pub struct ExecutionContext<'a> {
    pub store: &'a mut Store,
    pub source: &'a dyn QrnSource,
    /// Answers to follow-up questions (save confirmation)
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
}

/// Command executor
pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute a parsed command
    ///
    /// Failures come from the collaborators and are returned untouched; the
    /// caller decides whether to report them or give up.
    pub fn execute(command: Command, ctx: &mut ExecutionContext<'_>) -> Result<ExecutionResult> {
        match command {
            Command::Add(n) => ctx.store.add_to_store(ctx.source, n)?,
            Command::Live(style, n) => {
                let bytes = ctx.source.fetch(n)?;
                display(&mut *ctx.out, style, &bytes)?;
            }
            Command::Observe(style, n) => {
                let bytes = ctx.store.observe(ctx.source, n)?;
                display(&mut *ctx.out, style, &bytes)?;
            }
            Command::Peek(style, n) => display(&mut *ctx.out, style, ctx.store.peek(n))?,
            Command::PeekAll(style) => display(&mut *ctx.out, style, ctx.store.peek_all())?,
            Command::Fill => ctx.store.fill(ctx.source)?,
            Command::RestoreDefaults => ctx.store.restore_defaults()?,
            Command::Reinitialize => ctx.store.reinitialize(ctx.source)?,
            Command::Status => Self::status(ctx)?,
            Command::Save(path) => Self::save(Path::new(&path), ctx)?,
            Command::Set(setting, n) => Self::set(setting, n, ctx)?,
            Command::Help => write!(ctx.out, "{}", help_text())?,
            Command::Quit => return Ok(ExecutionResult::Quit),
        }
        Ok(ExecutionResult::Continue)
    }

    fn status(ctx: &mut ExecutionContext<'_>) -> Result<()> {
        let store = &*ctx.store;
        writeln!(ctx.out, "Store size: {} bytes", store.size())?;
        writeln!(ctx.out, "Minimum store size: {} bytes", store.min_store_size())?;
        writeln!(ctx.out, "Target store size: {} bytes", store.target_store_size())?;
        writeln!(ctx.out, "Store file: {}", store.store_file().display())?;
        Ok(())
    }

    fn set(setting: Setting, n: usize, ctx: &mut ExecutionContext<'_>) -> Result<()> {
        match setting {
            Setting::MinSize => {
                ctx.store.set_min_store_size(n)?;
                writeln!(ctx.out, "Minimum store size set to {n} bytes.")?;
            }
            Setting::TargetSize => {
                ctx.store.set_target_store_size(n)?;
                writeln!(ctx.out, "Target store size set to {n} bytes.")?;
            }
        }
        Ok(())
    }

    /// Write the raw store to `path`, asking before overwriting
    ///
    /// The existence check and the write are not atomic: a file created in
    /// between is overwritten without asking.
    fn save(path: &Path, ctx: &mut ExecutionContext<'_>) -> Result<()> {
        let bytes = ctx.store.bytes();
        if !path.exists() {
            fs::write(path, bytes)?;
            writeln!(ctx.out, "Saved {} bytes to {}", bytes.len(), path.display())?;
            return Ok(());
        }

        writeln!(
            ctx.out,
            "File {} already exists. Overwrite? (yes/no)",
            path.display()
        )?;
        ctx.out.flush()?;
        let mut answer = String::new();
        ctx.input.read_line(&mut answer)?;

        if answer.trim().eq_ignore_ascii_case("yes") {
            fs::write(path, bytes)?;
            writeln!(ctx.out, "Overwrote {} with {} bytes", path.display(), bytes.len())?;
        } else {
            log::debug!("save to {} declined", path.display());
            writeln!(ctx.out, "Save aborted.")?;
        }
        Ok(())
    }
}
