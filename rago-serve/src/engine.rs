//! ServeEngine: owns the caches, the knob controller, and the collaborators,
//! and drives each request end to end.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use rago_cache::{BlockCache, CacheStatsSnapshot, RetrievalCache};
use rago_control::{KnobController, PhaseLatencies};
use rago_core::config::RagoConfig;
use rago_core::errors::{RagoError, RagoResult};
use rago_core::models::{RequestOutcome, Timings, TuneKnobs};
use rago_core::traits::{IDocumentStore, IGenerationBackend, IRetrievalBackend};
use rago_observability::tracing_setup::events;
use rago_observability::{RequestLog, RequestLogEntry, ServingMetrics};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::assembly::ContextAssembler;
use crate::overlap::OverlapScheduler;

/// Controller plus the knobs it handed out last, guarded together.
struct ControlState {
    controller: KnobController,
    last_knobs: Option<TuneKnobs>,
}

/// Process-wide serving state shared by every request.
///
/// Both caches are shared by concurrent requests; each `get`/`put` is atomic
/// but nothing spans more than one cache call. The controller's rolling
/// timings start at the configured warm-up values and are overwritten after
/// every successful request (last writer wins under concurrency).
pub struct ServeEngine {
    config: RagoConfig,
    retrieval_cache: RetrievalCache,
    block_cache: BlockCache,
    control: Mutex<ControlState>,
    metrics: Mutex<ServingMetrics>,
    request_log: Mutex<RequestLog>,
    retrieval: Arc<dyn IRetrievalBackend>,
    store: Arc<dyn IDocumentStore>,
    generator: Arc<dyn IGenerationBackend>,
    pool: rayon::ThreadPool,
}

/// Serializable view of the engine's state.
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    pub retrieval_cache_len: usize,
    pub block_cache_len: usize,
    pub retrieval_cache_stats: CacheStatsSnapshot,
    pub block_cache_stats: CacheStatsSnapshot,
    pub last_latencies: PhaseLatencies,
    pub next_knobs: TuneKnobs,
    pub metrics: ServingMetrics,
}

impl ServeEngine {
    /// Validate `config` and build the caches, controller, and worker pool.
    pub fn new(
        config: RagoConfig,
        retrieval: Arc<dyn IRetrievalBackend>,
        store: Arc<dyn IDocumentStore>,
        generator: Arc<dyn IGenerationBackend>,
    ) -> RagoResult<Self> {
        config.validate()?;

        let retrieval_cache = RetrievalCache::new(config.cache.retrieval_capacity)?;
        let block_cache = BlockCache::new(config.cache.block_capacity)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.serve.worker_threads)
            .thread_name(|i| format!("rago-serve-{i}"))
            .build()
            .map_err(|e| RagoError::RuntimeError(format!("worker pool: {e}")))?;

        info!(
            retrieval_capacity = config.cache.retrieval_capacity,
            block_capacity = config.cache.block_capacity,
            p95_budget_ms = config.controller.p95_budget_ms,
            workers = config.serve.worker_threads,
            version = rago_core::constants::VERSION,
            "ServeEngine initialized"
        );

        Ok(Self {
            control: Mutex::new(ControlState {
                controller: KnobController::new(config.controller.clone()),
                last_knobs: None,
            }),
            metrics: Mutex::new(ServingMetrics::new(config.observability.latency_window)),
            request_log: Mutex::new(RequestLog::with_capacity(
                config.observability.request_log_capacity,
            )),
            retrieval_cache,
            block_cache,
            retrieval,
            store,
            generator,
            pool,
            config,
        })
    }

    /// Serve one question end to end.
    ///
    /// Retrieval and generation failures fail the whole request; the
    /// controller is only fed timings from requests that completed.
    pub fn serve(&self, question: &str) -> RagoResult<RequestOutcome> {
        match self.serve_inner(question) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                events::request_failed(question, &e.to_string());
                lock(&self.metrics).record_failure();
                Err(e)
            }
        }
    }

    fn serve_inner(&self, question: &str) -> RagoResult<RequestOutcome> {
        let started = Instant::now();
        let knobs = self.next_knobs();

        // Retrieval, overlapped with preparatory work on a miss.
        let scheduler = OverlapScheduler::new(&self.retrieval_cache, self.retrieval.as_ref());
        let resolved = scheduler.resolve_with_pause(
            question,
            &knobs,
            self.config.overlap.prep_for(knobs.cheap_mode),
        )?;

        // Context assembly, strictly after the doc ids are known.
        let context_started = Instant::now();
        let assembler = ContextAssembler::new(
            &self.block_cache,
            self.store.as_ref(),
            self.config.assembly.block_token_cost,
        );
        let assembly = assembler.assemble(
            &resolved.doc_ids,
            self.config.assembly.budget_for(knobs.cheap_mode),
        );
        let context_elapsed = context_started.elapsed();

        let gen_started = Instant::now();
        let answer = self
            .generator
            .generate(question, &assembly.context, knobs.cheap_mode)?;
        let gen_elapsed = gen_started.elapsed();

        let timings = Timings {
            retrieval_ms: Timings::ms(resolved.retrieval_wait),
            context_ms: Timings::ms(context_elapsed),
            gen_ms: Timings::ms(gen_elapsed),
            e2e_ms: Timings::ms(started.elapsed()),
            cache_hit: resolved.cache_hit,
        };

        lock(&self.control)
            .controller
            .observe(timings.retrieval_ms, timings.gen_ms);

        let outcome = RequestOutcome {
            question: question.to_string(),
            answer,
            knobs,
            doc_ids: resolved.doc_ids.to_vec(),
            assembly,
            timings,
        };

        lock(&self.metrics).record_request(&knobs, &timings, outcome.assembly.skipped.len());
        lock(&self.request_log).record(RequestLogEntry::from_outcome(&outcome));
        events::request_served(question, &knobs, &timings);
        Ok(outcome)
    }

    /// Ask the controller for the next knobs, logging a change of mode.
    fn next_knobs(&self) -> TuneKnobs {
        let mut state = lock(&self.control);
        let knobs = state.controller.next_knobs();
        if let Some(previous) = state.last_knobs {
            if previous != knobs {
                events::knobs_changed(&previous, &knobs);
            }
        }
        state.last_knobs = Some(knobs);
        knobs
    }

    /// Serve questions one after another, each seeing the previous one's timings.
    pub fn serve_traffic<S: AsRef<str>>(&self, questions: &[S]) -> Vec<RagoResult<RequestOutcome>> {
        questions.iter().map(|q| self.serve(q.as_ref())).collect()
    }

    /// Serve questions concurrently on the worker pool. Results are in input order.
    pub fn serve_batch<S: AsRef<str> + Sync>(
        &self,
        questions: &[S],
    ) -> Vec<RagoResult<RequestOutcome>> {
        self.pool.install(|| {
            questions
                .par_iter()
                .map(|q| self.serve(q.as_ref()))
                .collect()
        })
    }

    pub fn retrieval_cache(&self) -> &RetrievalCache {
        &self.retrieval_cache
    }

    pub fn block_cache(&self) -> &BlockCache {
        &self.block_cache
    }

    /// Latencies the controller will react to next.
    pub fn last_latencies(&self) -> PhaseLatencies {
        lock(&self.control).controller.last()
    }

    pub fn metrics(&self) -> ServingMetrics {
        lock(&self.metrics).clone()
    }

    /// The newest `n` request log entries, oldest first.
    pub fn recent_requests(&self, n: usize) -> Vec<RequestLogEntry> {
        lock(&self.request_log)
            .recent(n)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let (last_latencies, next_knobs) = {
            let state = lock(&self.control);
            (state.controller.last(), state.controller.next_knobs())
        };
        EngineSnapshot {
            retrieval_cache_len: self.retrieval_cache.len(),
            block_cache_len: self.block_cache.len(),
            retrieval_cache_stats: self.retrieval_cache.stats(),
            block_cache_stats: self.block_cache.stats(),
            last_latencies,
            next_knobs,
            metrics: self.metrics(),
        }
    }

    pub fn snapshot_json(&self) -> RagoResult<serde_json::Value> {
        Ok(serde_json::to_value(self.snapshot())?)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
