//! Running conformance cases, one canvas per case, on a pool of worker threads.

use crate::cases::ConformanceCase;
use crate::config::RunConfig;
use crate::error::CheckResult;
use crate::harness::{Harness, TestHandle, TestOutcome};
use crate::report::RunReport;
use crate::surface::Surface;
use canvas_check_canvas2d::Canvas2dContext;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Draw one case on a fresh canvas and check every sample.
///
/// The first failing sample ends the case.
pub fn run_case(case: &ConformanceCase, config: &RunConfig) -> TestOutcome {
    log::debug!(target: "check", "running {}", case.name);
    let mut t = TestHandle::new(case.name);

    let mut surface = None;
    t.step(|| {
        let mut ctx = Canvas2dContext::new(case.width, case.height)?;
        (case.draw)(&mut ctx)?;
        surface = Some(Surface::from_canvas(&ctx));
        Ok(())
    });

    if let Some(surface) = &surface {
        for sample in &case.samples {
            if !t.step(|| Ok(sample.check(surface)?)) {
                break;
            }
        }

        if t.has_failed() {
            if let Some(dir) = &config.dump_dir {
                match dump_surface(dir, case.name, surface) {
                    Ok(path) => log::info!(target: "check", "wrote {}", path.display()),
                    Err(err) => {
                        log::warn!(target: "check", "could not dump {}: {}", case.name, err)
                    }
                }
            }
        }
    }

    t.done()
}

/// Run `cases` on `config.jobs` worker threads.
///
/// Outcomes are reported in the order of `cases`. With `fail_fast`, cases
/// not yet started when a failure is seen are skipped and left out of the
/// report.
pub fn run_cases(cases: &[ConformanceCase], config: &RunConfig) -> RunReport {
    let jobs = config.jobs.clamp(1, cases.len().max(1));
    let next = &AtomicUsize::new(0);
    let stop = &AtomicBool::new(false);
    log::debug!(target: "check", "running {} cases on {} workers", cases.len(), jobs);

    let mut finished: Vec<(usize, TestOutcome)> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..jobs)
            .map(|_| {
                scope.spawn(move || {
                    let mut done = Vec::new();
                    loop {
                        if stop.load(Ordering::Relaxed) {
                            break;
                        }
                        let idx = next.fetch_add(1, Ordering::Relaxed);
                        let Some(case) = cases.get(idx) else {
                            break;
                        };
                        let outcome = run_case(case, config);
                        if config.fail_fast && !outcome.passed() {
                            stop.store(true, Ordering::Relaxed);
                        }
                        done.push((idx, outcome));
                    }
                    done
                })
            })
            .collect();

        workers
            .into_iter()
            .flat_map(|worker| {
                worker
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    });

    finished.sort_by_key(|(idx, _)| *idx);
    let mut harness = Harness::new();
    for (_, outcome) in finished {
        harness.report(outcome);
    }
    harness.finish()
}

fn dump_surface(dir: &Path, name: &str, surface: &Surface) -> CheckResult<std::path::PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{name}.png"));
    std::fs::write(&path, surface.to_png()?)?;
    Ok(path)
}
