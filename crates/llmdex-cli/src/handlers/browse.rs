use anyhow::{Result, bail};
use llmdex_engine::QueryState;
use llmdex_runtime::ResolvedConfig;

use crate::clipboard::SystemClipboard;
use crate::presentation::{TerminalCapabilityGuard, TerminalFactory, TerminalProfile};
use crate::session::SessionController;

/// Interactive session: load the catalogue, then hand the session to the
/// capability guard. A failed load ends here, before any UI exists.
pub fn handle(config: &ResolvedConfig, query: QueryState) -> Result<()> {
    let mut session = SessionController::load(
        || config.source.load(config.timeout),
        query,
        Box::new(SystemClipboard::new()),
    )?;

    let guard = TerminalCapabilityGuard::new(
        TerminalProfile::capture(),
        config.ui,
        config.keep_terminal_identity,
    );
    let report = guard.run(&mut TerminalFactory, &mut session);

    if report.is_exhausted() {
        let reasons: Vec<String> = report
            .failures()
            .map(|a| format!("{}: {}", a.tier, a.failure.as_deref().unwrap_or("failed")))
            .collect();
        bail!("no presentation tier could run ({})", reasons.join("; "));
    }

    Ok(())
}
