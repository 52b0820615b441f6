use std::time::Instant;

use anyhow::bail;

use cepr_common::cep::Cep;
use cepr_common::config::Config;
use cepr_core::lookup::{self, LookupOutcome};

use crate::terminal::{print, spinner};

pub async fn lookup(cep: &Cep, cfg: &Config) -> anyhow::Result<()> {
    print::header("cep lookup race", cfg.quiet);

    let spinner_handle = spinner::start(cfg.quiet);
    let start_time: Instant = Instant::now();

    let outcome: LookupOutcome = lookup::perform_lookup(cep, cfg).await;

    if let Some(spinner) = &spinner_handle {
        spinner.finish_and_clear();
    }

    match outcome {
        LookupOutcome::Resolved(address) => {
            print::address(&address);
            print::summary(start_time.elapsed(), cfg.quiet);
            Ok(())
        }
        LookupOutcome::TimedOut => {
            print::timeout();
            Ok(())
        }
        LookupOutcome::Failed(failures) => {
            let summary: String = failures
                .iter()
                .map(|(service, err)| format!("{service}: {err}"))
                .collect::<Vec<String>>()
                .join("; ");
            bail!("all lookup services failed ({summary})");
        }
    }
}
