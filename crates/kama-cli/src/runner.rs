//! Bounded worker pool over the page range. Pages are embarrassingly
//! parallel: each worker runs fetch → build → validate → gate end-to-end
//! with no shared mutable state, and the collector is the only writer of the
//! audit sink. Output ordering is reimposed afterwards by a stable sort on
//! the extracted index (ties broken by page discovery order).

use std::io::Write;
use std::ops::RangeInclusive;
use std::sync::Arc;

use anyhow::{Context, Result};
use kama_config::Config;
use kama_core::{AuditLog, Maybe};
use kama_fetch::PageSource;
use kama_html::HtmlPage;
use kama_lang_japanese::{GlyphAlphabet, HeuristicGate, build_record, fields};
use kama_types::{Component, PageRecord, check_record};
use kanal::AsyncReceiver;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::summary::Summary;

pub struct RunOutput {
    /// Accepted records with their structured component lists, sorted by
    /// (index, discovery order).
    pub accepted: Vec<(PageRecord, Vec<Component>)>,
    pub summary: Summary,
}

enum Outcome {
    Accepted {
        record: PageRecord,
        components: Vec<Component>,
        audit: AuditLog,
    },
    RequiredMissing {
        audit: AuditLog,
    },
    HeuristicRejected {
        audit: AuditLog,
    },
    ReadFailed {
        reason: String,
    },
    Defect {
        error: kama_core::Error,
    },
}

pub async fn run(
    source: Arc<dyn PageSource>,
    pages: RangeInclusive<u32>,
    config: &Config,
    cancel: CancellationToken,
) -> Result<RunOutput> {
    let (job_tx, job_rx) = kanal::bounded_async::<u32>(256);
    let (result_tx, result_rx) = kanal::bounded_async::<(u32, Outcome)>(256);

    let mut workers = JoinSet::new();
    for _ in 0..config.fetch.workers.max(1) {
        workers.spawn(worker_loop(
            source.clone(),
            job_rx.clone(),
            result_tx.clone(),
            config.gate.clone(),
            cancel.clone(),
        ));
    }
    // The collector must see the channel close once every worker is done.
    drop(result_tx);
    drop(job_rx);

    let feeder = tokio::spawn(async move {
        for number in pages {
            if job_tx.send(number).await.is_err() {
                break;
            }
        }
    });

    let mut audit_file = open_audit_file(config)?;
    let mut accepted: Vec<(u32, PageRecord, Vec<Component>)> = Vec::new();
    let mut summary = Summary::default();
    let mut defect: Option<kama_core::Error> = None;

    loop {
        let received = tokio::select! {
            _ = cancel.cancelled() => break,
            received = result_rx.recv() => received,
        };
        let Ok((number, outcome)) = received else {
            break; // all workers finished
        };

        summary.pages += 1;
        match outcome {
            Outcome::Accepted {
                record,
                components,
                audit,
            } => {
                flush_audit(&mut audit_file, &audit)?;
                summary.accepted += 1;
                accepted.push((number, record, components));
            }
            Outcome::RequiredMissing { audit } => {
                flush_audit(&mut audit_file, &audit)?;
                summary.required_missing += 1;
            }
            Outcome::HeuristicRejected { audit } => {
                flush_audit(&mut audit_file, &audit)?;
                summary.heuristic_rejected += 1;
            }
            Outcome::ReadFailed { reason } => {
                tracing::warn!(page = number, %reason, "page skipped");
                summary.read_failed += 1;
            }
            Outcome::Defect { error } => {
                // A structural violation is a defect in this codebase; stop
                // the run instead of silently corrupting the output.
                defect = Some(error);
                cancel.cancel();
                break;
            }
        }
    }

    feeder.abort();
    // Unblock any worker still waiting to hand over a result.
    drop(result_rx);
    while let Some(joined) = workers.join_next().await {
        if let Err(e) = joined {
            tracing::error!("worker task failed: {e}");
        }
    }
    audit_file.flush()?;

    if let Some(error) = defect {
        return Err(error).context("aborting the run");
    }

    accepted.sort_by_key(|(number, record, _)| (record.index, *number));
    Ok(RunOutput {
        accepted: accepted
            .into_iter()
            .map(|(_, record, components)| (record, components))
            .collect(),
        summary,
    })
}

async fn worker_loop(
    source: Arc<dyn PageSource>,
    jobs: AsyncReceiver<u32>,
    results: kanal::AsyncSender<(u32, Outcome)>,
    gate_config: kama_config::gate::GateConfig,
    cancel: CancellationToken,
) {
    let alphabet = GlyphAlphabet::default();
    let gate = HeuristicGate::new(gate_config);

    loop {
        let number = tokio::select! {
            _ = cancel.cancelled() => break,
            job = jobs.recv() => match job {
                Ok(number) => number,
                Err(_) => break, // feeder done, channel drained
            },
        };

        let outcome = process_page(source.as_ref(), number, &alphabet, &gate).await;
        if results.send((number, outcome)).await.is_err() {
            break;
        }
    }
}

async fn process_page(
    source: &dyn PageSource,
    number: u32,
    alphabet: &GlyphAlphabet,
    gate: &HeuristicGate,
) -> Outcome {
    let html = match source.page(number).await {
        Ok(html) => html,
        // An unreadable document is skipped, never a crash.
        Err(e) => {
            return Outcome::ReadFailed {
                reason: format!("{e:#}"),
            };
        }
    };

    let page = HtmlPage::parse(&html);
    let id = format!("page {number}");
    let mut audit = AuditLog::new();

    let record = match build_record(&page, &id, alphabet, &mut audit) {
        Maybe::Present(record) => record,
        Maybe::Absent => return Outcome::RequiredMissing { audit },
    };

    if let Err(error) = check_record(&record) {
        return Outcome::Defect { error };
    }

    match gate.apply(record, &mut audit) {
        Maybe::Present(record) => {
            let components = fields::component_glyphs(&page);
            Outcome::Accepted {
                record,
                components,
                audit,
            }
        }
        Maybe::Absent => Outcome::HeuristicRejected { audit },
    }
}

fn open_audit_file(config: &Config) -> Result<std::io::BufWriter<std::fs::File>> {
    let path = std::path::Path::new(&config.export.audit_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to open audit log {}", path.display()))?;
    Ok(std::io::BufWriter::new(file))
}

fn flush_audit(file: &mut impl Write, audit: &AuditLog) -> Result<()> {
    for event in audit.events() {
        writeln!(file, "{event}").context("failed to write audit log")?;
    }
    Ok(())
}
