use crate::modules::registration::use_cases::submit_registration::ports::PageEffects;

/// Shows notices on stdout for the command line front end. Navigation is only logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePageEffects;

impl PageEffects for ConsolePageEffects {
    fn alert(&self, notice: &str) {
        println!("{notice}");
    }

    fn navigate(&self, path: &str) {
        tracing::info!(%path, "navigate");
    }
}
