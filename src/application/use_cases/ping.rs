use crate::ports::outbound::{GemnasiumApi, ProgressReporter};
use crate::shared::Result;

/// PingUseCase - Checks that the Gemnasium API answers
pub struct PingUseCase<API, PR> {
    api: API,
    progress_reporter: PR,
}

impl<API, PR> PingUseCase<API, PR>
where
    API: GemnasiumApi,
    PR: ProgressReporter,
{
    pub fn new(api: API, progress_reporter: PR) -> Self {
        Self {
            api,
            progress_reporter,
        }
    }

    /// Sends the ping and reports every line of the answer
    pub fn execute(&self) -> Result<String> {
        let body = self.api.ping()?;
        for line in body.lines() {
            self.progress_reporter.report(line);
        }
        Ok(body)
    }
}
