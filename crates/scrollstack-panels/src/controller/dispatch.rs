//! Command dispatch for the ScrollStackController.

use crate::commands::StackCommand;
use crate::host::StackHost;

use super::ScrollStackController;

impl<H: StackHost> ScrollStackController<H> {
    /// Run a command. Returns whether it took effect; scroll requests are
    /// always accepted, even when they have to wait for layout.
    pub fn execute(&mut self, cmd: StackCommand) -> bool {
        match cmd {
            StackCommand::Add { panel, insets } => {
                self.add(panel, insets);
                true
            }
            StackCommand::Insert {
                panel,
                insets,
                location,
            } => {
                self.insert(panel, insets, location);
                true
            }
            StackCommand::Remove { panel, animated } => self.remove(panel, animated, None),
            StackCommand::Show {
                panel,
                placement,
                animated,
            } => self.show(panel, placement, animated, None),
            StackCommand::Hide { panel, animated } => self.hide(panel, animated, None),
            StackCommand::ScrollTo { panel } => {
                self.scroll_to(panel, None);
                true
            }
        }
    }

    /// Run commands in order. Returns how many took effect.
    pub fn execute_all(&mut self, commands: impl IntoIterator<Item = StackCommand>) -> usize {
        commands
            .into_iter()
            .map(|cmd| self.execute(cmd))
            .filter(|&applied| applied)
            .count()
    }
}
